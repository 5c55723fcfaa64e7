//! Platform API request and response types.

use serde::{Deserialize, Serialize};

use gateway_core::ChatTurn;

/// A chat message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl From<&ChatTurn> for ApiChatMessage {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }
    }
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ApiChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One choice in a chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

/// The message inside a completion choice. Content is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<Usage>,
}

/// Image generation request.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
}

/// One generated image datum. The URL is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    pub url: Option<String>,
}

/// Image generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

/// Audio transcription request.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionRequest {
    pub model: String,
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Audio transcription response.
///
/// The platform reports transcription failures in-band through the
/// `error` field rather than with an HTTP error status.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub text: Option<String>,
    pub language: Option<String>,
    pub error: Option<String>,
}

/// Error payload returned by the platform on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Body of an API error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
