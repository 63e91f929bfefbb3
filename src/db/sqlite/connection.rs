//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::runtime::{Handle, RuntimeFlavor};

use super::folder::SqliteFolderRepository;
use super::note::SqliteNoteRepository;
use super::tag::SqliteTagRepository;
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/sqlite");

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if needed.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every pooled connection to `:memory:` would see its own empty database,
    /// so the pool is pinned to one connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Folders<'a> = SqliteFolderRepository<'a>;
    type Tags<'a> = SqliteTagRepository<'a>;
    type Notes<'a> = SqliteNoteRepository<'a>;

    /// Runs on the calling thread; requires a multi-threaded tokio runtime.
    fn migrate(&self) -> DbResult<()> {
        let handle = Handle::try_current().map_err(|e| DbError::Migration {
            message: format!("No tokio runtime available: {}", e),
        })?;

        if handle.runtime_flavor() == RuntimeFlavor::CurrentThread {
            return Err(DbError::Migration {
                message: "Migrations require a multi-threaded tokio runtime".to_string(),
            });
        }

        tokio::task::block_in_place(|| handle.block_on(MIGRATOR.run(&self.pool))).map_err(
            |e| DbError::Migration {
                message: e.to_string(),
            },
        )
    }

    fn folders(&self) -> Self::Folders<'_> {
        SqliteFolderRepository { pool: &self.pool }
    }

    fn tags(&self) -> Self::Tags<'_> {
        SqliteTagRepository { pool: &self.pool }
    }

    fn notes(&self) -> Self::Notes<'_> {
        SqliteNoteRepository { pool: &self.pool }
    }
}
