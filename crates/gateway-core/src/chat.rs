//! Chat-completion gateway contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Wire name for the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn in a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// One choice in a chat-completion response.
///
/// Content is optional: a completion with no usable text is a valid,
/// non-error response that callers handle with fallback strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub content: Option<String>,
}

/// A normalized chat-completion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Build a response with a single text choice.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                content: Some(text.into()),
            }],
        }
    }

    /// Build a response whose single choice carries no text.
    pub fn empty() -> Self {
        Self {
            choices: vec![ChatChoice { content: None }],
        }
    }

    /// Text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// A gateway that turns an ordered list of chat turns into a completion.
///
/// This trait is object-safe and can be used with `Arc<dyn ChatGateway>`.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Request a completion for the given conversation.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError>;

    /// Get a human-readable name for this gateway implementation.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(ChatRole::System.as_str(), "system");
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_response_text_first_choice() {
        let response = ChatResponse {
            choices: vec![
                ChatChoice {
                    content: Some("first".to_string()),
                },
                ChatChoice {
                    content: Some("second".to_string()),
                },
            ],
        };
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_response_text_absent() {
        assert_eq!(ChatResponse::empty().text(), None);
        let no_choices = ChatResponse { choices: vec![] };
        assert_eq!(no_choices.text(), None);
    }
}
