//! Database models for trades.
//!
//! Shares and price are stored as TEXT and parsed into `Decimal` on load,
//! keeping the accumulation exact; the database never does arithmetic on
//! them. Timestamps are RFC 3339 TEXT.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tradepit_core::errors::Error;
use tradepit_core::ledger::{Trade, TradeSide};

/// Parses a stored RFC 3339 timestamp. Timestamps are informational only
/// (ordering is by sequence), so a malformed value is logged and replaced
/// rather than failing the read.
pub fn parse_timestamp_tolerant(value: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}", field_name, value, e);
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

/// Database model for trades
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(primary_key(account_id, sequence))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub account_id: i64,
    pub sequence: i64,
    pub side: String,
    pub timestamp: String,
    pub symbol: String,
    pub shares: String,
    pub price: String,
}

impl From<&Trade> for TradeDB {
    fn from(trade: &Trade) -> Self {
        TradeDB {
            account_id: trade.account_id,
            sequence: trade.sequence,
            side: trade.side.as_str().to_string(),
            timestamp: trade.timestamp.to_rfc3339(),
            symbol: trade.symbol.clone(),
            shares: trade.shares.to_string(),
            price: trade.price.to_string(),
        }
    }
}

/// Loading is strict for the fields holdings depend on: a row whose side
/// or quantities cannot be parsed is corrupt, and folding over it would
/// silently produce a wrong position.
impl TryFrom<TradeDB> for Trade {
    type Error = Error;

    fn try_from(db: TradeDB) -> std::result::Result<Self, Self::Error> {
        let side = TradeSide::from_str(&db.side).map_err(|_| {
            Error::Repository(format!(
                "Invalid side '{}' in trades row ({}, {})",
                db.side, db.account_id, db.sequence
            ))
        })?;

        Ok(Trade {
            account_id: db.account_id,
            sequence: db.sequence,
            side,
            timestamp: parse_timestamp_tolerant(&db.timestamp, "trades.timestamp"),
            symbol: db.symbol,
            shares: Decimal::from_str(&db.shares)?,
            price: Decimal::from_str(&db.price)?,
        })
    }
}
