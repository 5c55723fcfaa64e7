//! Upload orchestration: raw bytes in, durable URL out.
//!
//! Keys follow `{user_id}/{category}/{timestamp_ms}-{filename}`, so
//! uploads are namespaced per user and never collide across time.

use std::sync::Arc;

use gateway_core::{object_key, ObjectStorage};
use tracing::info;

use crate::error::OrchestratorError;

/// Category segment for audio uploads.
const AUDIO_CATEGORY: &str = "audio";

/// Category segment for tabular data file uploads.
const DATA_CATEGORY: &str = "data";

/// A stored data file, described for the analysis record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Durable URL of the stored object.
    pub url: String,
    /// Original file name.
    pub file_name: String,
    /// Content type the file was stored with.
    pub file_type: String,
}

/// Caller-facing upload operations.
#[derive(Clone)]
pub struct Uploads {
    storage: Arc<dyn ObjectStorage>,
}

impl Uploads {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Store an audio file and return its durable URL, ready to hand to
    /// the transcription orchestrator.
    pub async fn store_audio(
        &self,
        user_id: i64,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, OrchestratorError> {
        let stored = self
            .store(user_id, AUDIO_CATEGORY, filename, content_type, bytes)
            .await?;
        Ok(stored.url)
    }

    /// Store a tabular data file and return its description, ready to
    /// attach to an analysis request.
    pub async fn store_data_file(
        &self,
        user_id: i64,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, OrchestratorError> {
        self.store(user_id, DATA_CATEGORY, filename, content_type, bytes)
            .await
    }

    async fn store(
        &self,
        user_id: i64,
        category: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, OrchestratorError> {
        if filename.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "filename is required".to_string(),
            ));
        }

        let key = object_key(
            user_id,
            category,
            chrono::Utc::now().timestamp_millis(),
            filename,
        );
        let stored = self.storage.put(&key, bytes, content_type).await?;

        info!("Stored {} upload at {}", category, stored.key);

        Ok(StoredUpload {
            url: stored.url,
            file_name: filename.to_string(),
            file_type: content_type.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_gateway::MemoryStorage;

    #[tokio::test]
    async fn test_store_audio_returns_url() {
        let storage = Arc::new(MemoryStorage::new("https://cdn.example.com"));
        let uploads = Uploads::new(storage.clone());

        let url = uploads
            .store_audio(7, "memo.ogg", "audio/ogg", b"bytes")
            .await
            .unwrap();

        assert!(url.starts_with("https://cdn.example.com/7/audio/"));
        assert!(url.ends_with("-memo.ogg"));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_data_file_describes_upload() {
        let uploads = Uploads::new(Arc::new(MemoryStorage::new("https://cdn.example.com")));

        let stored = uploads
            .store_data_file(7, "sales.csv", "text/csv", b"a,b\n1,2")
            .await
            .unwrap();

        assert!(stored.url.contains("/7/data/"));
        assert_eq!(stored.file_name, "sales.csv");
        assert_eq!(stored.file_type, "text/csv");
    }

    #[tokio::test]
    async fn test_empty_filename_rejected() {
        let storage = Arc::new(MemoryStorage::new("https://cdn.example.com"));
        let uploads = Uploads::new(storage.clone());

        let result = uploads.store_audio(7, "  ", "audio/ogg", b"bytes").await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
        assert!(storage.is_empty().await);
    }
}
