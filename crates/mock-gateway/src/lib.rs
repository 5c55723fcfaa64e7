//! Mock gateway implementations for testing Atrium orchestrators.
//!
//! This crate provides canned implementations of the `gateway-core`
//! traits:
//!
//! - [`CannedChat`] - fixed chat reply, records every request
//! - [`EmptyChat`] - a valid completion carrying no text
//! - [`FailingChat`] - always returns a gateway error
//! - [`CannedImage`] - fixed (or absent) image URL
//! - [`CannedTranscriber`] - scripted transcript or upstream error
//! - [`MemoryStorage`] - in-memory object store with unique keys
//!
//! For production use, see the `platform-gateway` crate instead.
//!
//! # Example
//!
//! ```rust
//! use gateway_core::{ChatGateway, ChatTurn};
//! use mock_gateway::CannedChat;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gateway_core::GatewayError> {
//!     let chat = CannedChat::new("Hi there");
//!     let response = chat.complete(&[ChatTurn::user("Hello")]).await?;
//!     assert_eq!(response.text(), Some("Hi there"));
//!     Ok(())
//! }
//! ```

mod chat;
mod image;
mod storage;
mod transcribe;

pub use chat::{CannedChat, EmptyChat, FailingChat};
pub use image::CannedImage;
pub use storage::MemoryStorage;
pub use transcribe::CannedTranscriber;

// Re-export gateway-core types for convenience
pub use gateway_core::{
    async_trait, ChatGateway, ChatResponse, ChatTurn, GatewayError, GeneratedImage, ImageGateway,
    ObjectStorage, Transcript, TranscriptionGateway,
};
