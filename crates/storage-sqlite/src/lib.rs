//! SQLite storage implementation for Tradepit.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits and the transaction
//! executor defined in `tradepit-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for accounts, stocks, and the trade log
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the workspace where Diesel queries
//! exist; `tradepit-core` works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod stocks;
pub mod trades;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool,
    SqliteTransactionExecutor,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from tradepit-core for convenience
pub use tradepit_core::errors::{DatabaseError, Error, Result};
