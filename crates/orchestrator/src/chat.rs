//! Conversational chat orchestration.
//!
//! `send_message` is the core flow: the user's turn is persisted before
//! the assistant is consulted, so a gateway failure still leaves the
//! user's message durable. A successful round trip appends exactly two
//! messages.

use std::sync::Arc;

use database::{
    conversation, message, Conversation, LazyDatabase, Message, MessageRole,
};
use gateway_core::{ChatGateway, ChatTurn};
use tracing::{info, warn};

use crate::error::OrchestratorError;

/// Reply stored when the assistant returns no usable text.
pub const REPLY_FALLBACK: &str = "Sorry, I wasn't able to come up with a reply.";

/// Caller-facing conversation operations.
#[derive(Clone)]
pub struct Conversations {
    db: LazyDatabase,
    chat: Arc<dyn ChatGateway>,
}

impl Conversations {
    pub fn new(db: LazyDatabase, chat: Arc<dyn ChatGateway>) -> Self {
        Self { db, chat }
    }

    /// Create a conversation, returning its id.
    ///
    /// Titles may be empty; a thread can be named later by its first
    /// exchange.
    pub async fn create(&self, user_id: i64, title: &str) -> Result<i64, OrchestratorError> {
        let db = self.db.require().await?;
        let id = conversation::create_conversation(db.pool(), user_id, title).await?;

        info!("Created conversation {} for user {}", id, user_id);
        Ok(id)
    }

    /// List a user's conversations, most recently updated first.
    ///
    /// Degrades to an empty list when the store is unreachable.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Conversation>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        Ok(conversation::list_conversations(db.pool(), user_id).await?)
    }

    /// List a conversation's messages, oldest first.
    ///
    /// A conversation owned by someone else behaves like a missing one.
    /// Degrades to an empty list when the store is unreachable.
    pub async fn messages(
        &self,
        user_id: i64,
        conversation_id: i64,
    ) -> Result<Vec<Message>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        conversation::get_conversation(db.pool(), conversation_id, user_id).await?;
        Ok(message::list_messages(db.pool(), conversation_id).await?)
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// The full prior history plus the new message is handed to the
    /// assistant. When the completion succeeds but carries no text, the
    /// fallback reply is stored and returned rather than an error.
    pub async fn send_message(
        &self,
        user_id: i64,
        conversation_id: i64,
        text: &str,
    ) -> Result<String, OrchestratorError> {
        if text.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "message text is required".to_string(),
            ));
        }

        let db = self.db.require().await?;
        conversation::get_conversation(db.pool(), conversation_id, user_id).await?;

        // The user's turn is durable before the assistant is consulted.
        message::create_message(db.pool(), conversation_id, MessageRole::User, text).await?;
        conversation::touch_conversation(db.pool(), conversation_id).await?;

        let history = message::list_messages(db.pool(), conversation_id).await?;
        let turns: Vec<ChatTurn> = history.iter().map(turn_from_message).collect();

        let response = self.chat.complete(&turns).await?;
        let reply = match response.text() {
            Some(text) => text.to_string(),
            None => {
                warn!(
                    "Assistant returned no text for conversation {}",
                    conversation_id
                );
                REPLY_FALLBACK.to_string()
            }
        };

        message::create_message(db.pool(), conversation_id, MessageRole::Assistant, &reply).await?;
        conversation::touch_conversation(db.pool(), conversation_id).await?;

        Ok(reply)
    }

    /// Delete a conversation and all of its messages.
    pub async fn delete(
        &self,
        user_id: i64,
        conversation_id: i64,
    ) -> Result<(), OrchestratorError> {
        let db = self.db.require().await?;
        conversation::get_conversation(db.pool(), conversation_id, user_id).await?;

        // Messages first, so a partial failure never orphans them.
        let removed = message::delete_conversation_messages(db.pool(), conversation_id).await?;
        conversation::delete_conversation(db.pool(), conversation_id, user_id).await?;

        info!(
            "Deleted conversation {} ({} messages) for user {}",
            conversation_id, removed, user_id
        );
        Ok(())
    }
}

fn turn_from_message(message: &Message) -> ChatTurn {
    match message.role {
        MessageRole::User => ChatTurn::user(&message.content),
        MessageRole::Assistant => ChatTurn::assistant(&message.content),
        MessageRole::System => ChatTurn::system(&message.content),
    }
}
