//! Audio transcription orchestration.
//!
//! The gateway runs first; an upstream transcription failure persists
//! nothing. Only a successful transcript is recorded.

use std::sync::Arc;

use database::{
    transcription, LazyDatabase, NewNotification, NotificationKind, Transcription,
};
use gateway_core::TranscriptionGateway;
use tracing::info;

use crate::error::OrchestratorError;
use crate::notify;

/// Caller-facing transcription operations.
#[derive(Clone)]
pub struct Transcriptions {
    db: LazyDatabase,
    transcriber: Arc<dyn TranscriptionGateway>,
    notify: bool,
}

impl Transcriptions {
    pub fn new(db: LazyDatabase, transcriber: Arc<dyn TranscriptionGateway>) -> Self {
        Self {
            db,
            transcriber,
            notify: false,
        }
    }

    /// Enable or disable completion notifications.
    pub fn with_notifications(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Transcribe audio at a durable URL and persist the result.
    ///
    /// `language` is a hint; the stored language is whatever the
    /// gateway resolved, which may differ or be absent.
    pub async fn transcribe(
        &self,
        user_id: i64,
        audio_url: &str,
        language: Option<&str>,
    ) -> Result<Transcription, OrchestratorError> {
        if audio_url.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "audio_url is required".to_string(),
            ));
        }

        let transcript = self.transcriber.transcribe(audio_url, language).await?;

        let db = self.db.require().await?;
        let id = transcription::create_transcription(
            db.pool(),
            user_id,
            audio_url,
            &transcript.text,
            transcript.language.as_deref(),
        )
        .await?;

        info!("Stored transcription {} for user {}", id, user_id);

        if self.notify {
            notify::record_completion(
                db,
                NewNotification {
                    user_id,
                    kind: NotificationKind::TranscriptionComplete,
                    title: "Transcription complete".to_string(),
                    content: format!("Your audio at {} has been transcribed.", audio_url),
                    related_id: Some(id),
                },
            )
            .await;
        }

        Ok(transcription::get_transcription(db.pool(), id, user_id).await?)
    }

    /// List a user's transcriptions, newest first.
    ///
    /// Degrades to an empty list when the store is unreachable.
    pub async fn history(&self, user_id: i64) -> Result<Vec<Transcription>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        Ok(transcription::list_transcriptions(db.pool(), user_id).await?)
    }
}
