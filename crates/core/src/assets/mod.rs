//! Assets module - asset model and resolution.

mod assets_model;
mod assets_resolver;


pub use assets_model::Asset;
pub use assets_resolver::{AssetResolverTrait, QuoteBookResolver};
