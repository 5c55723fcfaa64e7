//! Shared gateway traits and types for Atrium AI capabilities.
//!
//! This crate defines the narrow interfaces through which the
//! orchestration core consumes external capabilities:
//!
//! - [`ChatGateway`] - chat completion over an ordered list of turns
//! - [`ImageGateway`] - single-shot image generation from a prompt
//! - [`TranscriptionGateway`] - audio transcription from a stored URL
//! - [`ObjectStorage`] - durable byte storage returning retrievable URLs
//! - [`GatewayError`] - the shared error taxonomy for all gateways
//!
//! None of the capabilities is implemented here; see `platform-gateway`
//! for the HTTP implementation and `mock-gateway` for test doubles.
//!
//! # Example
//!
//! ```rust
//! use gateway_core::{async_trait, ChatGateway, ChatResponse, ChatTurn, GatewayError};
//!
//! struct FixedReply;
//!
//! #[async_trait]
//! impl ChatGateway for FixedReply {
//!     async fn complete(&self, _turns: &[ChatTurn]) -> Result<ChatResponse, GatewayError> {
//!         Ok(ChatResponse::with_text("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedReply"
//!     }
//! }
//! ```

mod chat;
mod error;
mod image;
mod storage;
mod transcribe;

pub use chat::{ChatChoice, ChatGateway, ChatResponse, ChatRole, ChatTurn};
pub use error::GatewayError;
pub use image::{GeneratedImage, ImageGateway};
pub use storage::{object_key, ObjectStorage, StoredObject};
pub use transcribe::{Transcript, TranscriptionGateway};

// Re-export async_trait for implementors' convenience
pub use async_trait::async_trait;
