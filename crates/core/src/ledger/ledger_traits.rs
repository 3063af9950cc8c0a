//! Trade repository and ledger service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;

use super::ledger_model::{Trade, TradeRequest};
use crate::errors::Result;

/// Trait defining the contract for trade log persistence.
///
/// The log is append-only: there are no update or delete operations.
/// Methods taking a `SqliteConnection` participate in a caller-managed
/// transaction; the rest read through the implementation's own pool.
pub trait TradeRepositoryTrait: Send + Sync {
    /// All trades for one (account, symbol) position, ordered by sequence,
    /// read within the given transaction.
    fn position_trades_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: i64,
        symbol: &str,
    ) -> Result<Vec<Trade>>;

    /// Highest sequence number assigned to the account so far, if any,
    /// read within the given transaction.
    fn max_sequence_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: i64,
    ) -> Result<Option<i64>>;

    /// Appends a trade row within the given transaction. The composite
    /// `(account_id, sequence)` key must be free; a duplicate surfaces as
    /// a unique-constraint violation.
    fn append_in_transaction(&self, conn: &mut SqliteConnection, trade: &Trade) -> Result<()>;

    /// All trades for one (account, symbol) position, ordered by sequence.
    fn position_trades(&self, account_id: i64, symbol: &str) -> Result<Vec<Trade>>;

    /// Full trade history of an account, ordered by sequence.
    fn account_trades(&self, account_id: i64) -> Result<Vec<Trade>>;

    /// Distinct ids of accounts that have ever traded the symbol.
    fn owners_of(&self, symbol: &str) -> Result<Vec<i64>>;
}

/// Trait defining the operations the ledger exposes to the boundary layer.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Validates and durably appends a trade, returning the committed
    /// trade with its assigned sequence number. Any failure leaves the
    /// log unchanged.
    async fn submit_trade(&self, request: TradeRequest) -> Result<Trade>;

    /// Current net position for (account, symbol). Returns the
    /// [`HOLDING_UNKNOWN`](crate::constants::HOLDING_UNKNOWN) sentinel
    /// when the account or symbol does not exist.
    fn get_holding(&self, account_id: i64, symbol: &str) -> Result<Decimal>;

    /// Accounts that have ever traded the symbol. Returns
    /// `[NO_OWNER]` when none have.
    fn get_owners(&self, symbol: &str) -> Result<Vec<i64>>;

    /// Full trade history of an account in canonical (sequence) order.
    fn get_trades(&self, account_id: i64) -> Result<Vec<Trade>>;
}
