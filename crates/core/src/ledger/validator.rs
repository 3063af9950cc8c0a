//! Pure trade request validation.
//!
//! These checks need no storage access and run before any transaction is
//! opened. Existence and oversell checks, which must see the same snapshot
//! the append commits against, run inside the transaction in
//! `ledger_service`.

use rust_decimal::Decimal;

use super::ledger_errors::LedgerError;
use super::ledger_model::{TradeRequest, TradeSide};

/// Validates the storage-independent parts of a trade request, in order:
/// side first, then quantities. Returns the parsed side on success.
pub fn validate_request(request: &TradeRequest) -> std::result::Result<TradeSide, LedgerError> {
    let side = request.side.parse::<TradeSide>()?;

    if request.shares <= Decimal::ZERO || request.price <= Decimal::ZERO {
        return Err(LedgerError::InvalidQuantity {
            shares: request.shares,
            price: request.price,
        });
    }

    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(side: &str, shares: Decimal, price: Decimal) -> TradeRequest {
        TradeRequest::new(1, "AAPL", side, shares, price)
    }

    #[test]
    fn test_buy_and_sell_parse() {
        assert_eq!(
            validate_request(&request("buy", dec!(1), dec!(1))).unwrap(),
            TradeSide::Buy
        );
        assert_eq!(
            validate_request(&request("sell", dec!(1), dec!(1))).unwrap(),
            TradeSide::Sell
        );
    }

    #[test]
    fn test_unknown_side_rejected() {
        let err = validate_request(&request("hold", dec!(1), dec!(1))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSide(s) if s == "hold"));
    }

    #[test]
    fn test_side_is_case_sensitive() {
        let err = validate_request(&request("BUY", dec!(1), dec!(1))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSide(_)));
    }

    #[test]
    fn test_non_positive_quantities_rejected() {
        for (shares, price) in [
            (dec!(0), dec!(1)),
            (dec!(-1), dec!(1)),
            (dec!(1), dec!(0)),
            (dec!(1), dec!(-0.01)),
        ] {
            let err = validate_request(&request("buy", shares, price)).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidQuantity { .. }));
        }
    }

    #[test]
    fn test_side_checked_before_quantity() {
        // Both invalid: the side rejection must win (short-circuit order).
        let err = validate_request(&request("hold", dec!(0), dec!(0))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSide(_)));
    }
}
