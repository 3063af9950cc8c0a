use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::db::DbTransactionExecutor;
use crate::errors::Result;

/// Service for managing accounts (generic over the transaction executor).
pub struct AccountService<E: DbTransactionExecutor + Send + Sync + Clone> {
    repository: Arc<dyn AccountRepositoryTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> AccountService<E> {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>, transaction_executor: E) -> Self {
        Self {
            repository,
            transaction_executor,
        }
    }
}

#[async_trait::async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> AccountServiceTrait for AccountService<E> {
    /// Creates a new account
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        debug!("Creating account {}", new_account.id);
        new_account.validate()?;

        let repository = self.repository.clone();
        self.transaction_executor
            .execute(move |tx_conn| repository.create_in_transaction(new_account, tx_conn))
    }

    /// Retrieves an account by its id
    fn get_account(&self, account_id: i64) -> Result<Account> {
        (*self.repository).get_by_id(account_id)
    }

    /// Checks whether an account exists
    fn account_exists(&self, account_id: i64) -> Result<bool> {
        (*self.repository).exists(account_id)
    }

    /// Lists all accounts
    fn list_accounts(&self) -> Result<Vec<Account>> {
        (*self.repository).list()
    }
}
