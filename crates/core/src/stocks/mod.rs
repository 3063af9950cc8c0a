//! Stocks module - domain models, services, and traits.

mod stocks_model;
mod stocks_service;
mod stocks_traits;

// Re-export the public interface
pub use stocks_model::{NewStock, Stock};
pub use stocks_service::StockService;
pub use stocks_traits::{StockRepositoryTrait, StockServiceTrait};
