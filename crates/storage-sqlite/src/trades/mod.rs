//! SQLite storage implementation for the trade log.

mod model;
mod repository;

pub use model::{parse_timestamp_tolerant, TradeDB};
pub use repository::TradeRepository;
