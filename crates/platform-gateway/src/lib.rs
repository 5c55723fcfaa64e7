//! OpenAI-compatible platform client for Atrium.
//!
//! This crate implements the three AI gateway traits from
//! `gateway-core` against a single configurable base URL:
//!
//! - chat completion via `POST /v1/chat/completions`
//! - image generation via `POST /v1/images/generations`
//! - audio transcription via `POST /v1/audio/transcriptions`
//!
//! # Example
//!
//! ```rust,no_run
//! use gateway_core::{ChatGateway, ChatTurn};
//! use platform_gateway::{PlatformConfig, PlatformGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gateway_core::GatewayError> {
//!     let config = PlatformConfig::builder().api_key("sk-...").build();
//!     let gateway = PlatformGateway::new(config)?;
//!
//!     let response = gateway.complete(&[ChatTurn::user("Hello")]).await?;
//!     println!("{:?}", response.text());
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::PlatformGateway;
pub use config::{PlatformConfig, PlatformConfigBuilder};
