//! Error types for orchestrator operations.

use database::DatabaseError;
use gateway_core::GatewayError;
use thiserror::Error;

/// Errors that can occur during orchestration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Caller-supplied data failed a precondition. Rejected before any I/O.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Persistence failed.
    #[error("persistence failed: {0}")]
    Database(#[from] DatabaseError),

    /// An external capability failed.
    #[error("gateway call failed: {0}")]
    Gateway(#[from] GatewayError),
}
