//! Audio-transcription gateway contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Result of a successful transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// The transcribed text.
    pub text: String,
    /// Detected (or echoed) language code, if the gateway resolved one.
    pub language: Option<String>,
}

/// A gateway that transcribes audio stored at a durable URL.
///
/// Unlike the chat and image gateways, transcription has an explicit
/// upstream error variant: implementations map it to
/// [`GatewayError::Upstream`] and callers surface it as a failure.
#[async_trait]
pub trait TranscriptionGateway: Send + Sync {
    /// Transcribe the audio at `audio_url`, optionally hinting the language.
    async fn transcribe(
        &self,
        audio_url: &str,
        language: Option<&str>,
    ) -> Result<Transcript, GatewayError>;

    /// Get a human-readable name for this gateway implementation.
    fn name(&self) -> &str;
}
