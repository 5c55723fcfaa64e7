//! Text and image generation orchestration.
//!
//! The gateway runs first, the result row is persisted second; a
//! gateway failure persists nothing. Completion notifications are an
//! opt-in extension and are recorded only after the result row is
//! durable.

use std::sync::Arc;

use database::{
    generated_content, ContentKind, GeneratedContent, LazyDatabase, NewNotification,
    NotificationKind,
};
use gateway_core::{ChatGateway, ChatTurn, ImageGateway};
use tracing::{info, warn};

use crate::error::OrchestratorError;
use crate::notify;

/// System prompt framing the text generator.
pub const TEXT_SYSTEM_PROMPT: &str =
    "You are a professional content creation assistant. Produce clear, well-structured text \
     for the user's request.";

/// Body stored when the generator returns no usable text.
pub const GENERATION_FALLBACK: &str = "Generation failed.";

/// Caller-facing generation operations.
#[derive(Clone)]
pub struct Generation {
    db: LazyDatabase,
    chat: Arc<dyn ChatGateway>,
    images: Arc<dyn ImageGateway>,
    notify: bool,
}

impl Generation {
    pub fn new(db: LazyDatabase, chat: Arc<dyn ChatGateway>, images: Arc<dyn ImageGateway>) -> Self {
        Self {
            db,
            chat,
            images,
            notify: false,
        }
    }

    /// Enable or disable completion notifications.
    pub fn with_notifications(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Generate a text body from a prompt and persist the result.
    ///
    /// A completion that carries no text stores the fallback body; only
    /// a gateway error leaves nothing behind.
    pub async fn generate_text(
        &self,
        user_id: i64,
        prompt: &str,
    ) -> Result<GeneratedContent, OrchestratorError> {
        if prompt.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "prompt is required".to_string(),
            ));
        }

        let turns = [ChatTurn::system(TEXT_SYSTEM_PROMPT), ChatTurn::user(prompt)];
        let response = self.chat.complete(&turns).await?;
        let body = match response.text() {
            Some(text) => text.to_string(),
            None => {
                warn!("Text generation returned no text for user {}", user_id);
                GENERATION_FALLBACK.to_string()
            }
        };

        self.persist(user_id, ContentKind::Text, prompt, &body).await
    }

    /// Generate an image from a prompt and persist its URL.
    ///
    /// A generation without a URL is stored with an empty result, not
    /// treated as an error.
    pub async fn generate_image(
        &self,
        user_id: i64,
        prompt: &str,
    ) -> Result<GeneratedContent, OrchestratorError> {
        if prompt.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "prompt is required".to_string(),
            ));
        }

        let image = self.images.generate(prompt).await?;
        let url = image.url.unwrap_or_default();
        if url.is_empty() {
            warn!("Image generation returned no URL for user {}", user_id);
        }

        self.persist(user_id, ContentKind::Image, prompt, &url).await
    }

    /// List a user's generation history, newest first, optionally
    /// filtered by kind.
    ///
    /// Degrades to an empty list when the store is unreachable.
    pub async fn history(
        &self,
        user_id: i64,
        kind: Option<ContentKind>,
    ) -> Result<Vec<GeneratedContent>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        Ok(generated_content::list_generated_content(db.pool(), user_id, kind).await?)
    }

    async fn persist(
        &self,
        user_id: i64,
        kind: ContentKind,
        prompt: &str,
        result: &str,
    ) -> Result<GeneratedContent, OrchestratorError> {
        let db = self.db.require().await?;
        let id =
            generated_content::create_generated_content(db.pool(), user_id, kind, prompt, result)
                .await?;

        info!("Stored {:?} generation {} for user {}", kind, id, user_id);

        if self.notify {
            let title = match kind {
                ContentKind::Text => "Text generation complete",
                ContentKind::Image => "Image generation complete",
            };
            notify::record_completion(
                db,
                NewNotification {
                    user_id,
                    kind: NotificationKind::GenerationComplete,
                    title: title.to_string(),
                    content: format!("Your request \"{}\" has finished.", prompt),
                    related_id: Some(id),
                },
            )
            .await;
        }

        Ok(generated_content::get_generated_content(db.pool(), id, user_id).await?)
    }
}
