//! Tests for trade domain models.

#[cfg(test)]
mod tests {
    use crate::ledger::{LedgerError, Trade, TradeSide};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trade_side_serialization() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&TradeSide::Sell).unwrap(), "\"sell\"");
    }

    #[test]
    fn test_trade_side_deserialization() {
        assert_eq!(
            serde_json::from_str::<TradeSide>("\"buy\"").unwrap(),
            TradeSide::Buy
        );
        assert_eq!(
            serde_json::from_str::<TradeSide>("\"sell\"").unwrap(),
            TradeSide::Sell
        );
    }

    #[test]
    fn test_trade_side_from_str_rejects_unknown() {
        let err = "short".parse::<TradeSide>().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSide(s) if s == "short"));
    }

    #[test]
    fn test_trade_side_round_trips_as_str() {
        for side in [TradeSide::Buy, TradeSide::Sell] {
            assert_eq!(side.as_str().parse::<TradeSide>().unwrap(), side);
        }
    }

    #[test]
    fn test_signed_shares() {
        let mut trade = Trade {
            account_id: 1,
            sequence: 1,
            side: TradeSide::Buy,
            timestamp: Utc::now(),
            symbol: "AAPL".to_string(),
            shares: dec!(7.5),
            price: dec!(180),
        };
        assert_eq!(trade.signed_shares(), dec!(7.5));

        trade.side = TradeSide::Sell;
        assert_eq!(trade.signed_shares(), dec!(-7.5));
    }
}
