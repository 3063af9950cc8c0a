//! Stock repository and service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::stocks_model::{NewStock, Stock};
use crate::errors::Result;

/// Trait defining the contract for Stock repository operations.
pub trait StockRepositoryTrait: Send + Sync {
    /// Registers a new stock within a given database transaction.
    fn create_in_transaction(
        &self,
        new_stock: NewStock,
        conn: &mut SqliteConnection,
    ) -> Result<Stock>;

    /// Checks symbol existence within a given database transaction.
    fn exists_in_transaction(&self, conn: &mut SqliteConnection, symbol: &str) -> Result<bool>;

    /// Retrieves a stock by its symbol.
    fn get_by_symbol(&self, symbol: &str) -> Result<Stock>;

    /// Checks whether a symbol exists.
    fn exists(&self, symbol: &str) -> Result<bool>;

    /// Lists all stocks ordered by symbol.
    fn list(&self) -> Result<Vec<Stock>>;
}

/// Trait defining the contract for Stock service operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    /// Registers a new stock with business validation.
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;

    /// Retrieves a stock by symbol.
    fn get_stock(&self, symbol: &str) -> Result<Stock>;

    /// Checks whether a symbol exists.
    fn stock_exists(&self, symbol: &str) -> Result<bool>;

    /// Lists all stocks.
    fn list_stocks(&self) -> Result<Vec<Stock>>;
}
