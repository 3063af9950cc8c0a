//! Trade domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ledger_errors::LedgerError;

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl FromStr for TradeSide {
    type Err = LedgerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            other => Err(LedgerError::InvalidSide(other.to_string())),
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, committed trade.
///
/// `(account_id, sequence)` is the composite key; `sequence` defines the
/// canonical history order within an account. The timestamp is
/// informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub account_id: i64,
    pub sequence: i64,
    pub side: TradeSide,
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub shares: Decimal,
    pub price: Decimal,
}

impl Trade {
    /// Contribution of this trade to the holding of its (account, symbol)
    /// position: positive for a buy, negative for a sell.
    pub fn signed_shares(&self) -> Decimal {
        match self.side {
            TradeSide::Buy => self.shares,
            TradeSide::Sell => -self.shares,
        }
    }
}

/// A trade submission as it arrives from the boundary layer.
///
/// The side is kept as the raw string so that an unrecognized value is
/// rejected by the validator as `InvalidSide` rather than at parse time
/// outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub account_id: i64,
    pub symbol: String,
    pub side: String,
    pub shares: Decimal,
    pub price: Decimal,
}

impl TradeRequest {
    pub fn new(
        account_id: i64,
        symbol: impl Into<String>,
        side: impl Into<String>,
        shares: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            account_id,
            symbol: symbol.into(),
            side: side.into(),
            shares,
            price,
        }
    }
}
