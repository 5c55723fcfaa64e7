//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found (or owned by a different user)
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The database connection could not be established.
    ///
    /// Reported by write paths when the lazy handle failed to connect;
    /// read paths degrade to empty results instead.
    #[error("database unavailable")]
    Unavailable,
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
