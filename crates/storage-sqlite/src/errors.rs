//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and
//! convert them to the database-agnostic error types defined in
//! `tradepit_core`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use tradepit_core::errors::{DatabaseError, Error};

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `tradepit_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Core error: {0}")]
    Core(Error),
}

/// Convert core Error to StorageError (for the transaction executor, whose
/// closures return core errors). The original error is kept intact so the
/// rejection taxonomy survives the round trip through the transaction.
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::Core(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(kind, info)) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => {
                        Error::Database(DatabaseError::UniqueViolation(message))
                    }
                    DatabaseErrorKind::ForeignKeyViolation => {
                        Error::Database(DatabaseError::ForeignKeyViolation(message))
                    }
                    // SQLITE_BUSY surfaces as an unknown kind; detect it by
                    // message so the ledger can classify it as retryable.
                    _ if message.contains("database is locked") => {
                        Error::Database(DatabaseError::Busy(message))
                    }
                    _ => Error::Database(DatabaseError::QueryFailed(message)),
                }
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::Core(e) => e,
        }
    }
}

/// Extension trait for easily converting Diesel Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, diesel::result::Error>`
/// (and the r2d2 equivalent) which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> tradepit_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> tradepit_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> tradepit_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
