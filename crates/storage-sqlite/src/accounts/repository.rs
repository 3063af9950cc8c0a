use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use tradepit_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use tradepit_core::errors::Result;

use super::model::AccountDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::accounts;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Creates a new account within a given database transaction
    fn create_in_transaction(
        &self,
        new_account: NewAccount,
        conn: &mut SqliteConnection,
    ) -> Result<Account> {
        new_account.validate()?;

        let account_db = AccountDB::new(new_account.id, Utc::now());

        diesel::insert_into(accounts::table)
            .values(&account_db)
            .execute(conn)
            .into_core()?;

        Ok(account_db.into())
    }

    fn exists_in_transaction(&self, conn: &mut SqliteConnection, account_id: i64) -> Result<bool> {
        diesel::select(exists(
            accounts::table.filter(accounts::id.eq(account_id)),
        ))
        .get_result::<bool>(conn)
        .into_core()
    }

    /// Retrieves an account by its id
    fn get_by_id(&self, account_id: i64) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .find(account_id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(account.into())
    }

    fn exists(&self, account_id: i64) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        self.exists_in_transaction(&mut conn, account_id)
    }

    /// Lists all accounts ordered by id
    fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts::table
            .select(AccountDB::as_select())
            .order(accounts::id.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}
