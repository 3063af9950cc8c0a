//! Rejection and failure taxonomy for trade submission.
//!
//! Every way a trade can fail is a distinct variant. The boundary layer
//! may collapse these for its own callers, but the core keeps them apart:
//! only [`LedgerError::Conflict`] is safe to retry.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::errors::{DatabaseError, Error};

#[derive(Error, Debug)]
pub enum LedgerError {
    /// The trade side was neither "buy" nor "sell".
    #[error("Invalid trade side '{0}', expected 'buy' or 'sell'")]
    InvalidSide(String),

    /// Shares or price was zero or negative.
    #[error("Shares and price must be positive (shares={shares}, price={price})")]
    InvalidQuantity { shares: Decimal, price: Decimal },

    /// The account does not exist.
    #[error("Account {0} does not exist")]
    UnknownAccount(i64),

    /// The stock symbol does not exist.
    #[error("Symbol '{0}' does not exist")]
    UnknownSymbol(String),

    /// A sell would take the holding below zero.
    #[error("Cannot sell {requested} shares of '{symbol}': only {held} held")]
    Oversell {
        symbol: String,
        requested: Decimal,
        held: Decimal,
    },

    /// The transaction lost a race with a concurrent trade. Retryable.
    #[error("Transaction conflict: {0}")]
    Conflict(String),

    /// The storage layer could not be reached. Not retryable by the core.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl LedgerError {
    /// Whether the ledger may re-attempt the submission after this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Conflict(_))
    }
}

/// Reclassifies storage-level failures of a trade transaction into the
/// ledger taxonomy. A unique-violation on `(account_id, sequence)` or a
/// busy database means two trades raced; a connection failure means the
/// request cannot be served at all. Everything else passes through.
pub fn classify_storage_error(err: Error) -> Error {
    match err {
        Error::Database(DatabaseError::UniqueViolation(msg)) => LedgerError::Conflict(msg).into(),
        Error::Database(DatabaseError::Busy(msg)) => LedgerError::Conflict(msg).into(),
        Error::Database(DatabaseError::ConnectionFailed(msg))
        | Error::Database(DatabaseError::PoolCreationFailed(msg)) => {
            LedgerError::StorageUnavailable(msg).into()
        }
        other => other,
    }
}
