use log::debug;
use std::sync::Arc;

use super::stocks_model::{NewStock, Stock};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::db::DbTransactionExecutor;
use crate::errors::Result;

/// Service for managing stocks (generic over the transaction executor).
pub struct StockService<E: DbTransactionExecutor + Send + Sync + Clone> {
    repository: Arc<dyn StockRepositoryTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> StockService<E> {
    /// Creates a new StockService instance
    pub fn new(repository: Arc<dyn StockRepositoryTrait>, transaction_executor: E) -> Self {
        Self {
            repository,
            transaction_executor,
        }
    }
}

#[async_trait::async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> StockServiceTrait for StockService<E> {
    /// Registers a new stock
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        debug!("Registering stock {}", new_stock.symbol);
        new_stock.validate()?;

        let repository = self.repository.clone();
        self.transaction_executor
            .execute(move |tx_conn| repository.create_in_transaction(new_stock, tx_conn))
    }

    /// Retrieves a stock by its symbol
    fn get_stock(&self, symbol: &str) -> Result<Stock> {
        (*self.repository).get_by_symbol(symbol)
    }

    /// Checks whether a symbol exists
    fn stock_exists(&self, symbol: &str) -> Result<bool> {
        (*self.repository).exists(symbol)
    }

    /// Lists all stocks
    fn list_stocks(&self) -> Result<Vec<Stock>> {
        (*self.repository).list()
    }
}
