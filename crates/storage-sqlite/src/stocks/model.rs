//! Database models for stocks.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tradepit_core::stocks::Stock;

use crate::trades::parse_timestamp_tolerant;

/// Database model for stocks
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::stocks)]
#[diesel(primary_key(symbol))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockDB {
    pub symbol: String,
    pub created_at: String,
}

impl From<StockDB> for Stock {
    fn from(db: StockDB) -> Self {
        Stock {
            symbol: db.symbol,
            created_at: parse_timestamp_tolerant(&db.created_at, "stocks.created_at"),
        }
    }
}

impl StockDB {
    pub fn new(symbol: String, created_at: DateTime<Utc>) -> Self {
        Self {
            symbol,
            created_at: created_at.to_rfc3339(),
        }
    }
}
