//! Chat gateway mocks.

use async_trait::async_trait;
use tokio::sync::Mutex;

use gateway_core::{ChatGateway, ChatResponse, ChatTurn, GatewayError};

/// A chat gateway that always answers with a fixed reply and records
/// every request it receives.
#[derive(Debug, Default)]
pub struct CannedChat {
    reply: String,
    requests: Mutex<Vec<Vec<ChatTurn>>>,
}

impl CannedChat {
    /// Create a gateway that always answers `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests seen so far, oldest first.
    pub async fn requests(&self) -> Vec<Vec<ChatTurn>> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ChatGateway for CannedChat {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError> {
        self.requests.lock().await.push(turns.to_vec());
        Ok(ChatResponse::with_text(self.reply.clone()))
    }

    fn name(&self) -> &str {
        "CannedChat"
    }
}

/// A chat gateway whose completion carries no text.
///
/// Useful for exercising fallback-string handling: absent text is a
/// valid, non-error response.
#[derive(Debug, Clone, Default)]
pub struct EmptyChat;

#[async_trait]
impl ChatGateway for EmptyChat {
    async fn complete(&self, _turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError> {
        Ok(ChatResponse::empty())
    }

    fn name(&self) -> &str {
        "EmptyChat"
    }
}

/// A chat gateway that always fails.
#[derive(Debug, Clone)]
pub struct FailingChat {
    message: String,
}

impl FailingChat {
    /// Create a gateway failing with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingChat {
    fn default() -> Self {
        Self::new("canned failure")
    }
}

#[async_trait]
impl ChatGateway for FailingChat {
    async fn complete(&self, _turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError> {
        Err(GatewayError::Unavailable(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingChat"
    }
}
