//! SQLite persistence layer for Atrium.
//!
//! This crate provides async database operations for users,
//! conversations, messages, generated content, transcriptions, data
//! analyses and notifications using SQLx with SQLite.
//!
//! Two handles are exposed:
//!
//! - [`Database`] - a connected pool wrapper with migrations
//! - [`LazyDatabase`] - a process-wide init-on-first-use handle whose
//!   read paths degrade to "no database" while write paths fail loudly
//!
//! # Example
//!
//! ```no_run
//! use database::{conversation, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:atrium.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let id = conversation::create_conversation(db.pool(), 1, "Trip planning").await?;
//!     println!("created conversation {}", id);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod conversation;
pub mod error;
pub mod generated_content;
pub mod message;
pub mod models;
pub mod notification;
pub mod transcription;
pub mod user;

pub use error::{DatabaseError, Result};
pub use models::{
    Analysis, ContentKind, Conversation, GeneratedContent, Message, MessageRole, NewAnalysis,
    NewNotification, Notification, NotificationKind, Role, Transcription, User, UserUpsert,
};

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for an in-memory database in tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema
    /// is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Process-wide database handle, connected on first use.
///
/// The connection (including migrations) is attempted exactly once per
/// process; a failed attempt is not retried, and the handle stays in
/// the "unavailable" state for the rest of the process lifetime.
///
/// Read paths call [`LazyDatabase::get`] and treat `None` as "user has
/// zero records"; write paths call [`LazyDatabase::require`], which
/// fails with [`DatabaseError::Unavailable`] so a write is never
/// silently dropped.
#[derive(Debug, Clone)]
pub struct LazyDatabase {
    url: String,
    cell: Arc<OnceCell<Option<Database>>>,
}

impl LazyDatabase {
    /// Create a handle that will connect to `url` on first use.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Wrap an already connected database (used in tests and by callers
    /// that manage the connection themselves).
    pub fn from_database(db: Database) -> Self {
        Self {
            url: String::new(),
            cell: Arc::new(OnceCell::new_with(Some(Some(db)))),
        }
    }

    /// Get the database, attempting the one-time connection if needed.
    ///
    /// Returns `None` when the connection attempt failed; read paths
    /// degrade to empty results in that case.
    pub async fn get(&self) -> Option<&Database> {
        self.cell
            .get_or_init(|| async {
                match Database::connect(&self.url).await {
                    Ok(db) => match db.migrate().await {
                        Ok(()) => Some(db),
                        Err(e) => {
                            tracing::warn!("Database migration failed: {}", e);
                            None
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Database connection failed: {}", e);
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    /// Get the database or fail loudly. Used by write paths.
    pub async fn require(&self) -> Result<&Database> {
        self.get().await.ok_or(DatabaseError::Unavailable)
    }
}
