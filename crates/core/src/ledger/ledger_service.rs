//! Trade execution orchestration.
//!
//! `submit_trade` composes the validator, the sequence allocator, and the
//! append into a single database transaction: the holding and max-sequence
//! reads observe exactly the state the append commits against. Conflicts
//! (a lost race on the write lock or on the `(account_id, sequence)` key)
//! are retried a bounded number of times; every other failure surfaces
//! immediately.

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::holdings::net_position;
use super::ledger_errors::{classify_storage_error, LedgerError};
use super::ledger_model::{Trade, TradeRequest, TradeSide};
use super::ledger_traits::{LedgerServiceTrait, TradeRepositoryTrait};
use super::sequence::next_sequence;
use super::validator::validate_request;
use crate::accounts::AccountRepositoryTrait;
use crate::constants::{HOLDING_UNKNOWN, MAX_CONFLICT_RETRIES, NO_OWNER};
use crate::db::DbTransactionExecutor;
use crate::errors::{Error, Result};
use crate::stocks::StockRepositoryTrait;

/// The transactional trade ledger (generic over the transaction executor).
pub struct LedgerService<E: DbTransactionExecutor + Send + Sync + Clone> {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    stock_repository: Arc<dyn StockRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> LedgerService<E> {
    /// Creates a new LedgerService instance
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        stock_repository: Arc<dyn StockRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        transaction_executor: E,
    ) -> Self {
        Self {
            account_repository,
            stock_repository,
            trade_repository,
            transaction_executor,
        }
    }

    /// Runs one transactional submission attempt: existence checks,
    /// oversell check, sequence allocation, append.
    fn execute_attempt(&self, request: &TradeRequest, side: TradeSide) -> Result<Trade> {
        let account_repository = self.account_repository.clone();
        let stock_repository = self.stock_repository.clone();
        let trade_repository = self.trade_repository.clone();
        let request = request.clone();

        self.transaction_executor.execute(move |tx_conn| {
            if !account_repository.exists_in_transaction(tx_conn, request.account_id)? {
                return Err(LedgerError::UnknownAccount(request.account_id).into());
            }
            if !stock_repository.exists_in_transaction(tx_conn, &request.symbol)? {
                return Err(LedgerError::UnknownSymbol(request.symbol.clone()).into());
            }

            if side == TradeSide::Sell {
                let position = trade_repository.position_trades_in_transaction(
                    tx_conn,
                    request.account_id,
                    &request.symbol,
                )?;
                let held = net_position(&position);
                if request.shares > held {
                    return Err(LedgerError::Oversell {
                        symbol: request.symbol.clone(),
                        requested: request.shares,
                        held,
                    }
                    .into());
                }
            }

            let max = trade_repository.max_sequence_in_transaction(tx_conn, request.account_id)?;
            let trade = Trade {
                account_id: request.account_id,
                sequence: next_sequence(max),
                side,
                timestamp: Utc::now(),
                symbol: request.symbol.clone(),
                shares: request.shares,
                price: request.price,
            };

            trade_repository.append_in_transaction(tx_conn, &trade)?;
            Ok(trade)
        })
    }
}

#[async_trait::async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> LedgerServiceTrait for LedgerService<E> {
    async fn submit_trade(&self, request: TradeRequest) -> Result<Trade> {
        let side = validate_request(&request).map_err(Error::from)?;

        let mut attempt = 0;
        loop {
            match self.execute_attempt(&request, side) {
                Ok(trade) => {
                    debug!(
                        "Committed trade: account={} seq={} {} {} {} @ {}",
                        trade.account_id,
                        trade.sequence,
                        trade.side,
                        trade.shares,
                        trade.symbol,
                        trade.price
                    );
                    return Ok(trade);
                }
                Err(err) => {
                    let err = classify_storage_error(err);
                    let retryable =
                        matches!(&err, Error::Ledger(ledger_err) if ledger_err.is_retryable());
                    if retryable && attempt < MAX_CONFLICT_RETRIES {
                        attempt += 1;
                        warn!(
                            "Trade submission conflict for account {} (attempt {}/{}): {}",
                            request.account_id, attempt, MAX_CONFLICT_RETRIES, err
                        );
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }

    fn get_holding(&self, account_id: i64, symbol: &str) -> Result<Decimal> {
        if !self.account_repository.exists(account_id)? || !self.stock_repository.exists(symbol)? {
            return Ok(HOLDING_UNKNOWN);
        }

        let position = self.trade_repository.position_trades(account_id, symbol)?;
        Ok(net_position(&position))
    }

    fn get_owners(&self, symbol: &str) -> Result<Vec<i64>> {
        let owners = self.trade_repository.owners_of(symbol)?;
        if owners.is_empty() {
            return Ok(vec![NO_OWNER]);
        }
        Ok(owners)
    }

    fn get_trades(&self, account_id: i64) -> Result<Vec<Trade>> {
        self.trade_repository.account_trades(account_id)
    }
}
