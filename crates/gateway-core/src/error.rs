//! Error types for gateway operations.

use thiserror::Error;

/// Errors that can occur while calling an external capability.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway is temporarily unreachable.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    /// A network-level failure while talking to the gateway.
    #[error("network error: {0}")]
    Network(String),

    /// The upstream capability explicitly reported it could not
    /// complete the request.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The gateway response could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The gateway is misconfigured (missing key, bad URL, ...).
    #[error("configuration error: {0}")]
    Configuration(String),
}
