//! Account domain models.
//!
//! Accounts carry nothing the ledger cares about beyond their id: existence
//! is a precondition for trading, and that is the only attribute the trade
//! path ever reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a brokerage account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub id: i64,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.id < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Account id must be non-negative, got {}",
                self.id
            ))));
        }
        Ok(())
    }
}
