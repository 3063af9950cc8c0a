//! Stock domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a tradable instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for registering a new stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub symbol: String,
}

impl NewStock {
    /// Validates the new stock data.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Stock symbol cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
