//! Account repository and service traits.
//!
//! These traits define the contract for account operations. Methods that
//! take a `SqliteConnection` participate in a caller-managed transaction;
//! the others read through the implementation's own pool.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account within a given database transaction.
    fn create_in_transaction(
        &self,
        new_account: NewAccount,
        conn: &mut SqliteConnection,
    ) -> Result<Account>;

    /// Checks account existence within a given database transaction.
    fn exists_in_transaction(&self, conn: &mut SqliteConnection, account_id: i64) -> Result<bool>;

    /// Retrieves an account by its id.
    fn get_by_id(&self, account_id: i64) -> Result<Account>;

    /// Checks whether an account exists.
    fn exists(&self, account_id: i64) -> Result<bool>;

    /// Lists all accounts ordered by id.
    fn list(&self) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by id.
    fn get_account(&self, account_id: i64) -> Result<Account>;

    /// Checks whether an account exists.
    fn account_exists(&self, account_id: i64) -> Result<bool>;

    /// Lists all accounts.
    fn list_accounts(&self) -> Result<Vec<Account>>;
}
