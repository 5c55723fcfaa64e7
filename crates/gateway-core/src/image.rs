//! Image-generation gateway contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Result of an image generation call.
///
/// The URL is optional: a generation that produced no retrievable URL
/// is a valid response, recorded by callers as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: Option<String>,
}

impl GeneratedImage {
    /// An image available at the given URL.
    pub fn at(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// A generation that yielded no URL.
    pub fn missing() -> Self {
        Self { url: None }
    }
}

/// A gateway that turns a text prompt into a generated image.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Generate an image for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GatewayError>;

    /// Get a human-readable name for this gateway implementation.
    fn name(&self) -> &str;
}
