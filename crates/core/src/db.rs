//! Database transaction seam.
//!
//! The core crate never opens connections or transactions itself. Services
//! are generic over a [`DbTransactionExecutor`] so that the read-then-append
//! sequence of a trade submission runs as a single atomic unit. The
//! `storage-sqlite` crate implements the trait over its connection pool
//! using `BEGIN IMMEDIATE` transactions.

use diesel::sqlite::SqliteConnection;

use crate::errors::Result;

/// Trait for executing database work within a single transaction.
///
/// The closure either returns `Ok` and the transaction commits, or returns
/// `Err` and the transaction rolls back with storage left untouched.
pub trait DbTransactionExecutor: Send + Sync + Clone {
    fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send,
        T: Send;
}
