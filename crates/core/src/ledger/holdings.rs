//! Holdings aggregation.
//!
//! A holding is never stored; it is the fold of the trade log for one
//! (account, symbol) position. Accumulation is exact decimal arithmetic,
//! so long histories cannot drift the way floating point would.

use rust_decimal::Decimal;

use super::ledger_model::Trade;

/// Net position for the trades of a single (account, symbol) pair:
/// buys add shares, sells subtract them. An empty slice folds to zero.
///
/// The caller is responsible for passing trades of one position only;
/// the fold itself does not filter.
pub fn net_position(trades: &[Trade]) -> Decimal {
    trades
        .iter()
        .fold(Decimal::ZERO, |acc, trade| acc + trade.signed_shares())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TradeSide;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn trade(sequence: i64, side: TradeSide, shares: Decimal) -> Trade {
        Trade {
            account_id: 1,
            sequence,
            side,
            timestamp: Utc::now(),
            symbol: "AAPL".to_string(),
            shares,
            price: dec!(100),
        }
    }

    #[test]
    fn test_empty_log_folds_to_zero() {
        assert_eq!(net_position(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_buys_accumulate() {
        let trades = vec![
            trade(1, TradeSide::Buy, dec!(10)),
            trade(2, TradeSide::Buy, dec!(2.5)),
        ];
        assert_eq!(net_position(&trades), dec!(12.5));
    }

    #[test]
    fn test_sells_subtract() {
        let trades = vec![
            trade(1, TradeSide::Buy, dec!(10)),
            trade(2, TradeSide::Sell, dec!(4)),
            trade(3, TradeSide::Sell, dec!(6)),
        ];
        assert_eq!(net_position(&trades), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_shares_are_exact() {
        // 0.1 + 0.2 == 0.3 holds in decimal, unlike f64
        let trades = vec![
            trade(1, TradeSide::Buy, dec!(0.1)),
            trade(2, TradeSide::Buy, dec!(0.2)),
        ];
        assert_eq!(net_position(&trades), dec!(0.3));
    }
}
