#[cfg(test)]
mod tests {
    use crate::assets::Asset;
    use crate::transactions::{Transaction, TransactionLedger, TransactionType};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str, transaction_type: TransactionType, quantity: Decimal) -> Transaction {
        let price = dec!(100);
        Transaction {
            id: format!("tx-{}-{}", symbol, quantity),
            asset: Asset::from_trade_price(symbol, price, "USD"),
            transaction_type,
            quantity,
            price,
            total_amount: quantity * price,
            date: Utc::now(),
            fees: None,
            notes: None,
        }
    }

    #[test]
    fn test_append_leaves_original_untouched() {
        let ledger = TransactionLedger::new();
        let appended = ledger.append(trade("AAPL", TransactionType::Buy, dec!(10)));

        assert!(ledger.is_empty());
        assert_eq!(appended.len(), 1);
    }

    #[test]
    fn test_append_preserves_creation_order() {
        let ledger = TransactionLedger::new()
            .append(trade("AAPL", TransactionType::Buy, dec!(10)))
            .append(trade("MSFT", TransactionType::Buy, dec!(2)))
            .append(trade("AAPL", TransactionType::Sell, dec!(4)));

        let symbols: Vec<&str> = ledger.iter().map(|tx| tx.asset.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "AAPL"]);
        assert_eq!(ledger.latest().unwrap().transaction_type, TransactionType::Sell);
    }

    #[test]
    fn test_for_symbol_filters_case_insensitively() {
        let ledger = TransactionLedger::new()
            .append(trade("AAPL", TransactionType::Buy, dec!(10)))
            .append(trade("MSFT", TransactionType::Buy, dec!(2)));

        let apple = ledger.for_symbol("aapl");
        assert_eq!(apple.len(), 1);
        assert_eq!(apple[0].asset.symbol, "AAPL");
    }
}
