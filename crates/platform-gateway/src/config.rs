//! Configuration for the platform gateway.

use std::env;

use gateway_core::GatewayError;

/// Configuration for [`crate::PlatformGateway`].
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Base API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model used for chat completions.
    pub chat_model: String,

    /// Model used for image generation.
    pub image_model: String,

    /// Model used for audio transcription.
    pub transcribe_model: String,

    /// Maximum tokens for chat responses.
    pub max_tokens: Option<u32>,

    /// Temperature for chat generation (0.0 - 2.0).
    pub temperature: Option<f32>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            chat_model: "gpt-4o-mini".to_string(),
            image_model: "dall-e-3".to_string(),
            transcribe_model: "whisper-1".to_string(),
            max_tokens: Some(1024),
            temperature: Some(0.7),
        }
    }
}

impl PlatformConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PLATFORM_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `PLATFORM_API_URL` - base URL (default: https://api.openai.com)
    /// - `PLATFORM_CHAT_MODEL` - chat model (default: gpt-4o-mini)
    /// - `PLATFORM_IMAGE_MODEL` - image model (default: dall-e-3)
    /// - `PLATFORM_TRANSCRIBE_MODEL` - transcription model (default: whisper-1)
    /// - `PLATFORM_MAX_TOKENS` - max tokens (default: 1024)
    /// - `PLATFORM_TEMPERATURE` - temperature (default: 0.7)
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var("PLATFORM_API_KEY")
            .map_err(|_| GatewayError::Configuration("PLATFORM_API_KEY not set".to_string()))?;

        let defaults = Self::default();

        let api_url = env::var("PLATFORM_API_URL").unwrap_or(defaults.api_url);
        let chat_model = env::var("PLATFORM_CHAT_MODEL").unwrap_or(defaults.chat_model);
        let image_model = env::var("PLATFORM_IMAGE_MODEL").unwrap_or(defaults.image_model);
        let transcribe_model =
            env::var("PLATFORM_TRANSCRIBE_MODEL").unwrap_or(defaults.transcribe_model);

        let max_tokens = env::var("PLATFORM_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.max_tokens);

        let temperature = env::var("PLATFORM_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.temperature);

        Ok(Self {
            api_url,
            api_key,
            chat_model,
            image_model,
            transcribe_model,
            max_tokens,
            temperature,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> PlatformConfigBuilder {
        PlatformConfigBuilder::default()
    }
}

/// Builder for [`PlatformConfig`].
#[derive(Debug, Default)]
pub struct PlatformConfigBuilder {
    config: PlatformConfig,
}

impl PlatformConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the chat model.
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.config.chat_model = model.into();
        self
    }

    /// Set the image model.
    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.config.image_model = model.into();
        self
    }

    /// Set the transcription model.
    pub fn transcribe_model(mut self, model: impl Into<String>) -> Self {
        self.config.transcribe_model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PlatformConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlatformConfig::default();

        assert_eq!(config.api_url, "https://api.openai.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.image_model, "dall-e-3");
        assert_eq!(config.transcribe_model, "whisper-1");
        assert_eq!(config.max_tokens, Some(1024));
        assert_eq!(config.temperature, Some(0.7));
    }

    #[test]
    fn test_builder_all_options() {
        let config = PlatformConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .chat_model("chat-x")
            .image_model("image-x")
            .transcribe_model("audio-x")
            .max_tokens(512)
            .temperature(0.2)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.chat_model, "chat-x");
        assert_eq!(config.image_model, "image-x");
        assert_eq!(config.transcribe_model, "audio-x");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.2));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_platform_vars() {
            std::env::remove_var("PLATFORM_API_KEY");
            std::env::remove_var("PLATFORM_API_URL");
            std::env::remove_var("PLATFORM_CHAT_MODEL");
            std::env::remove_var("PLATFORM_IMAGE_MODEL");
            std::env::remove_var("PLATFORM_TRANSCRIBE_MODEL");
            std::env::remove_var("PLATFORM_MAX_TOKENS");
            std::env::remove_var("PLATFORM_TEMPERATURE");
        }

        // Missing API key should error.
        clear_all_platform_vars();
        let result = PlatformConfig::from_env();
        assert!(matches!(result, Err(GatewayError::Configuration(_))));

        // Only API key set, defaults used.
        clear_all_platform_vars();
        std::env::set_var("PLATFORM_API_KEY", "test-env-key");
        let config = PlatformConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.openai.com");
        assert_eq!(config.chat_model, "gpt-4o-mini");

        // All vars set.
        std::env::set_var("PLATFORM_API_URL", "https://test.api.com");
        std::env::set_var("PLATFORM_CHAT_MODEL", "chat-t");
        std::env::set_var("PLATFORM_IMAGE_MODEL", "image-t");
        std::env::set_var("PLATFORM_TRANSCRIBE_MODEL", "audio-t");
        std::env::set_var("PLATFORM_MAX_TOKENS", "2048");
        std::env::set_var("PLATFORM_TEMPERATURE", "0.9");

        let config = PlatformConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.chat_model, "chat-t");
        assert_eq!(config.image_model, "image-t");
        assert_eq!(config.transcribe_model, "audio-t");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.9));

        clear_all_platform_vars();
    }
}
