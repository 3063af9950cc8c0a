use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use tradepit_core::errors::Result;
use tradepit_core::stocks::{NewStock, Stock, StockRepositoryTrait};

use super::model::StockDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::stocks;

/// Repository for managing stock master data in the database
pub struct StockRepository {
    pool: Arc<DbPool>,
}

impl StockRepository {
    /// Creates a new StockRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl StockRepositoryTrait for StockRepository {
    /// Registers a new stock within a given database transaction
    fn create_in_transaction(
        &self,
        new_stock: NewStock,
        conn: &mut SqliteConnection,
    ) -> Result<Stock> {
        new_stock.validate()?;

        let stock_db = StockDB::new(new_stock.symbol, Utc::now());

        diesel::insert_into(stocks::table)
            .values(&stock_db)
            .execute(conn)
            .into_core()?;

        Ok(stock_db.into())
    }

    fn exists_in_transaction(&self, conn: &mut SqliteConnection, symbol: &str) -> Result<bool> {
        diesel::select(exists(stocks::table.filter(stocks::symbol.eq(symbol))))
            .get_result::<bool>(conn)
            .into_core()
    }

    /// Retrieves a stock by its symbol
    fn get_by_symbol(&self, symbol: &str) -> Result<Stock> {
        let mut conn = get_connection(&self.pool)?;

        let stock = stocks::table
            .find(symbol)
            .select(StockDB::as_select())
            .first::<StockDB>(&mut conn)
            .into_core()?;

        Ok(stock.into())
    }

    fn exists(&self, symbol: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        self.exists_in_transaction(&mut conn, symbol)
    }

    /// Lists all stocks ordered by symbol
    fn list(&self) -> Result<Vec<Stock>> {
        let mut conn = get_connection(&self.pool)?;

        let results = stocks::table
            .select(StockDB::as_select())
            .order(stocks::symbol.asc())
            .load::<StockDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Stock::from).collect())
    }
}
