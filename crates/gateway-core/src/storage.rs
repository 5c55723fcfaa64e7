//! Object-storage gateway contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// A durably stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    /// The key the object was stored under.
    pub key: String,
    /// Durable, retrievable URL for the object.
    pub url: String,
}

/// A gateway that stores byte buffers and returns retrievable URLs.
///
/// Keys must be unique per upload; storing under an existing key is an
/// error rather than a silent overwrite.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key` with the given content type.
    async fn put(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<StoredObject, GatewayError>;

    /// Get a human-readable name for this storage implementation.
    fn name(&self) -> &str;
}

/// Compose an upload key namespaced per user and content category.
///
/// The timestamp component keeps keys unique across repeated uploads of
/// the same filename: `{user_id}/{category}/{timestamp_ms}-{filename}`.
pub fn object_key(user_id: i64, category: &str, timestamp_ms: i64, filename: &str) -> String {
    format!("{}/{}/{}-{}", user_id, category, timestamp_ms, filename)
}
