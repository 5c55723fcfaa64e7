//! Transcription gateway mock.

use async_trait::async_trait;

use gateway_core::{GatewayError, Transcript, TranscriptionGateway};

#[derive(Debug, Clone)]
enum Script {
    Success {
        text: String,
        language: Option<String>,
    },
    Failure(String),
}

/// A transcription gateway scripted to succeed or to report an
/// upstream error.
#[derive(Debug, Clone)]
pub struct CannedTranscriber {
    script: Script,
}

impl CannedTranscriber {
    /// Always succeed with the given transcript.
    pub fn success(text: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            script: Script::Success {
                text: text.into(),
                language: language.map(|l| l.to_string()),
            },
        }
    }

    /// Always report the given upstream error.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            script: Script::Failure(error.into()),
        }
    }
}

#[async_trait]
impl TranscriptionGateway for CannedTranscriber {
    async fn transcribe(
        &self,
        _audio_url: &str,
        language: Option<&str>,
    ) -> Result<Transcript, GatewayError> {
        match &self.script {
            Script::Success {
                text,
                language: detected,
            } => Ok(Transcript {
                text: text.clone(),
                // Echo the hint when the script carries no language.
                language: detected
                    .clone()
                    .or_else(|| language.map(|l| l.to_string())),
            }),
            Script::Failure(error) => Err(GatewayError::Upstream(error.clone())),
        }
    }

    fn name(&self) -> &str {
        "CannedTranscriber"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_with_detected_language() {
        let gateway = CannedTranscriber::success("hello", Some("en"));
        let transcript = gateway.transcribe("https://a/b.ogg", None).await.unwrap();
        assert_eq!(transcript.text, "hello");
        assert_eq!(transcript.language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_success_echoes_hint() {
        let gateway = CannedTranscriber::success("hola", None);
        let transcript = gateway
            .transcribe("https://a/b.ogg", Some("es"))
            .await
            .unwrap();
        assert_eq!(transcript.language.as_deref(), Some("es"));
    }

    #[tokio::test]
    async fn test_failure_is_upstream() {
        let gateway = CannedTranscriber::failing("unsupported format");
        let result = gateway.transcribe("https://a/b.ogg", None).await;
        match result {
            Err(GatewayError::Upstream(message)) => {
                assert_eq!(message, "unsupported format");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
