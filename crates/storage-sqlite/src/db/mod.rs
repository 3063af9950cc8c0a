//! Connection pool, migrations, and the transaction executor.

use log::{error, info};
use std::path::Path;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use tradepit_core::db::DbTransactionExecutor;
use tradepit_core::errors::{DatabaseError, Error, Result};

use crate::errors::StorageError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Creates the database file (and parent directory) if needed and puts it
/// in WAL mode so readers never block on the single writer.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            std::fs::create_dir_all(db_dir)
                .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
        }
    }

    {
        let mut conn = SqliteConnection::establish(db_path)
            .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
        conn.batch_execute(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
    }

    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1)) // Keep at least one connection ready
        .connection_timeout(std::time::Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer {}))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let result = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::Database(DatabaseError::MigrationFailed(e.to_string()))
    })?;

    if result.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        for migration_version in &result {
            info!("Applied migration {}", migration_version);
        }
    }

    Ok(())
}

/// Gets a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        use diesel::RunQueryDsl;

        diesel::sql_query(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .execute(conn)
        .map_err(diesel::r2d2::Error::QueryError)?;

        Ok(())
    }
}

/// Transaction executor over the connection pool.
///
/// Every job runs inside `BEGIN IMMEDIATE`: the SQLite write lock is taken
/// up front, so the reads a job performs are stable through its commit. A
/// concurrent writer waits on `busy_timeout` and then fails with a busy
/// error, which the ledger treats as a retryable conflict.
#[derive(Clone)]
pub struct SqliteTransactionExecutor {
    pool: Arc<DbPool>,
}

impl SqliteTransactionExecutor {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl DbTransactionExecutor for SqliteTransactionExecutor {
    fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send,
        T: Send,
    {
        let mut conn = get_connection(&self.pool)?;

        conn.immediate_transaction::<T, StorageError, _>(|tx_conn| {
            f(tx_conn).map_err(StorageError::from)
        })
        .map_err(Error::from)
    }
}
