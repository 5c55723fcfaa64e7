//! Image gateway mock.

use async_trait::async_trait;

use gateway_core::{GatewayError, GeneratedImage, ImageGateway};

/// An image gateway that returns a fixed, possibly absent, URL.
#[derive(Debug, Clone, Default)]
pub struct CannedImage {
    url: Option<String>,
}

impl CannedImage {
    /// Always return an image at `url`.
    pub fn at(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Always return a generation with no URL.
    pub fn missing() -> Self {
        Self { url: None }
    }
}

#[async_trait]
impl ImageGateway for CannedImage {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GatewayError> {
        Ok(GeneratedImage {
            url: self.url.clone(),
        })
    }

    fn name(&self) -> &str {
        "CannedImage"
    }
}
