//! Platform gateway implementation over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use gateway_core::{
    ChatChoice, ChatGateway, ChatResponse, ChatTurn, GatewayError, GeneratedImage, ImageGateway,
    Transcript, TranscriptionGateway,
};

use crate::api_types::{
    ApiChatMessage, ApiError, ChatCompletionRequest, ChatCompletionResponse,
    ImageGenerationRequest, ImageGenerationResponse, TranscriptionRequest, TranscriptionResponse,
};
use crate::config::PlatformConfig;

/// Client for an OpenAI-compatible platform API.
///
/// One `PlatformGateway` serves all three AI capabilities (chat, image
/// generation, transcription) against the configured base URL.
pub struct PlatformGateway {
    client: Client,
    config: PlatformConfig,
}

impl PlatformGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: PlatformConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().build().map_err(|e| {
            GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a gateway from environment variables.
    ///
    /// See [`PlatformConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(PlatformConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// POST a JSON body to an API path and decode the JSON response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + std::fmt::Debug,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.api_url, path);

        debug!("Sending request to {}: {:?}", url, body);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a typed API error first.
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GatewayError::Upstream(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(GatewayError::Upstream(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ChatGateway for PlatformGateway {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: turns.iter().map(ApiChatMessage::from).collect(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let completion: ChatCompletionResponse =
            self.post_json("/v1/chat/completions", &request).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        if completion.choices.is_empty() {
            warn!("Chat completion returned no choices");
        }

        Ok(ChatResponse {
            choices: completion
                .choices
                .into_iter()
                .map(|choice| ChatChoice {
                    content: choice.message.content,
                })
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "PlatformGateway"
    }
}

#[async_trait]
impl ImageGateway for PlatformGateway {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GatewayError> {
        let request = ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt: prompt.to_string(),
        };

        let response: ImageGenerationResponse =
            self.post_json("/v1/images/generations", &request).await?;

        // A response without a URL is valid; callers store an empty string.
        let url = response.data.into_iter().next().and_then(|datum| datum.url);
        if url.is_none() {
            warn!("Image generation returned no URL");
        }

        Ok(GeneratedImage { url })
    }

    fn name(&self) -> &str {
        "PlatformGateway"
    }
}

#[async_trait]
impl TranscriptionGateway for PlatformGateway {
    async fn transcribe(
        &self,
        audio_url: &str,
        language: Option<&str>,
    ) -> Result<Transcript, GatewayError> {
        let request = TranscriptionRequest {
            model: self.config.transcribe_model.clone(),
            audio_url: audio_url.to_string(),
            language: language.map(|l| l.to_string()),
        };

        let response: TranscriptionResponse =
            self.post_json("/v1/audio/transcriptions", &request).await?;

        // The platform reports failures in-band through the error field.
        if let Some(error) = response.error {
            return Err(GatewayError::Upstream(error));
        }

        let text = response.text.ok_or_else(|| {
            GatewayError::InvalidResponse("transcription response missing text".to_string())
        })?;

        Ok(Transcript {
            text,
            language: response.language,
        })
    }

    fn name(&self) -> &str {
        "PlatformGateway"
    }
}
