use diesel::dsl::max;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use tradepit_core::errors::Result;
use tradepit_core::ledger::{Trade, TradeRepositoryTrait};

use super::model::TradeDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::trades;

/// Repository for the append-only trade log.
///
/// There are deliberately no update or delete methods: a committed trade
/// is immutable.
pub struct TradeRepository {
    pool: Arc<DbPool>,
}

impl TradeRepository {
    /// Creates a new TradeRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn load_position(
        conn: &mut SqliteConnection,
        account_id: i64,
        symbol: &str,
    ) -> Result<Vec<Trade>> {
        let rows = trades::table
            .filter(trades::account_id.eq(account_id))
            .filter(trades::symbol.eq(symbol))
            .order(trades::sequence.asc())
            .select(TradeDB::as_select())
            .load::<TradeDB>(conn)
            .into_core()?;

        rows.into_iter().map(Trade::try_from).collect()
    }
}

impl TradeRepositoryTrait for TradeRepository {
    fn position_trades_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: i64,
        symbol: &str,
    ) -> Result<Vec<Trade>> {
        Self::load_position(conn, account_id, symbol)
    }

    fn max_sequence_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: i64,
    ) -> Result<Option<i64>> {
        trades::table
            .filter(trades::account_id.eq(account_id))
            .select(max(trades::sequence))
            .first::<Option<i64>>(conn)
            .into_core()
    }

    fn append_in_transaction(&self, conn: &mut SqliteConnection, trade: &Trade) -> Result<()> {
        let trade_db = TradeDB::from(trade);

        diesel::insert_into(trades::table)
            .values(&trade_db)
            .execute(conn)
            .into_core()?;

        Ok(())
    }

    fn position_trades(&self, account_id: i64, symbol: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_position(&mut conn, account_id, symbol)
    }

    fn account_trades(&self, account_id: i64) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = trades::table
            .filter(trades::account_id.eq(account_id))
            .order(trades::sequence.asc())
            .select(TradeDB::as_select())
            .load::<TradeDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Trade::try_from).collect()
    }

    fn owners_of(&self, symbol: &str) -> Result<Vec<i64>> {
        let mut conn = get_connection(&self.pool)?;

        trades::table
            .filter(trades::symbol.eq(symbol))
            .select(trades::account_id)
            .distinct()
            .order(trades::account_id.asc())
            .load::<i64>(&mut conn)
            .into_core()
    }
}
