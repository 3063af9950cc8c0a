//! Database models for accounts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use tradepit_core::accounts::Account;

use crate::trades::parse_timestamp_tolerant;

/// Database model for accounts
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: i64,
    pub created_at: String,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Account {
            id: db.id,
            created_at: parse_timestamp_tolerant(&db.created_at, "accounts.created_at"),
        }
    }
}

impl AccountDB {
    pub fn new(id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: created_at.to_rfc3339(),
        }
    }
}
