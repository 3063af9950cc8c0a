//! Ledger module - the trade execution core.
//!
//! A trade request is validated, assigned the next per-account sequence
//! number, and appended to the immutable trade log, all inside one
//! database transaction. Holdings are never stored; they are derived by
//! folding the log.

mod holdings;
mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;
mod sequence;
mod validator;

#[cfg(test)]
mod ledger_model_tests;


pub use holdings::net_position;
pub use ledger_errors::LedgerError;
pub use ledger_model::{Trade, TradeRequest, TradeSide};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerServiceTrait, TradeRepositoryTrait};
pub use sequence::next_sequence;
pub use validator::validate_request;
