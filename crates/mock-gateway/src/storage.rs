//! In-memory object storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gateway_core::{GatewayError, ObjectStorage, StoredObject};

/// An in-memory object store.
///
/// Objects live in a map keyed by upload key; storing under an existing
/// key is an upstream error, matching the no-silent-overwrite contract.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    base_url: String,
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryStorage {
    /// Create a store whose URLs are rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }

    /// Fetch a stored object's bytes and content type.
    pub async fn get(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<StoredObject, GatewayError> {
        let mut objects = self.objects.lock().await;

        if objects.contains_key(key) {
            return Err(GatewayError::Upstream(format!(
                "object already exists: {}",
                key
            )));
        }

        objects.insert(key.to_string(), (bytes.to_vec(), content_type.to_string()));

        Ok(StoredObject {
            key: key.to_string(),
            url: format!("{}/{}", self.base_url.trim_end_matches('/'), key),
        })
    }

    fn name(&self) -> &str {
        "MemoryStorage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let storage = MemoryStorage::new("https://cdn.example.com");

        let stored = storage
            .put("1/audio/123-memo.ogg", b"bytes", "audio/ogg")
            .await
            .unwrap();
        assert_eq!(stored.url, "https://cdn.example.com/1/audio/123-memo.ogg");

        let (bytes, content_type) = storage.get("1/audio/123-memo.ogg").await.unwrap();
        assert_eq!(bytes, b"bytes");
        assert_eq!(content_type, "audio/ogg");
    }

    #[tokio::test]
    async fn test_duplicate_key_rejected() {
        let storage = MemoryStorage::new("https://cdn.example.com");

        storage.put("k", b"a", "text/plain").await.unwrap();
        let result = storage.put("k", b"b", "text/plain").await;
        assert!(matches!(result, Err(GatewayError::Upstream(_))));
        assert_eq!(storage.len().await, 1);
    }
}
