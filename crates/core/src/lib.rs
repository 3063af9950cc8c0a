//! Tradepit Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the trade ledger: request
//! validation, per-account sequence allocation, holdings derivation, and
//! the transactional orchestration that ties them together. Persistence
//! is reached through repository traits and a transaction executor that
//! are implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod constants;
pub mod db;
pub mod errors;
pub mod ledger;
pub mod stocks;

// Re-export the ledger surface
pub use ledger::{LedgerError, LedgerService, LedgerServiceTrait, Trade, TradeRequest, TradeSide};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
