//! Caller-facing orchestration layer for Atrium's AI capabilities.
//!
//! Each orchestrator composes one or more gateway traits from
//! `gateway-core` with the persistence layer from `database`:
//!
//! - [`Accounts`] - sign-in synchronization and lookup
//! - [`Conversations`] - chat threads and the send-message flow
//! - [`Generation`] - text and image generation with history
//! - [`Transcriptions`] - audio transcription with history
//! - [`Analyses`] - tabular data analysis with chart extraction
//! - [`Notifications`] - notification reads and state transitions
//! - [`Uploads`] - raw bytes to durable URLs
//!
//! All orchestrators share the same persistence discipline: reads
//! degrade to empty results when the store is unreachable, writes fail
//! loudly, and gateway calls run before the rows that record them.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use database::LazyDatabase;
//! use orchestrator::Conversations;
//! use platform_gateway::PlatformGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = LazyDatabase::new("sqlite:atrium.db?mode=rwc");
//!     let gateway = Arc::new(PlatformGateway::from_env()?);
//!
//!     let conversations = Conversations::new(db, gateway);
//!     let id = conversations.create(1, "Trip planning").await?;
//!     let reply = conversations.send_message(1, id, "Where should I go?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod accounts;
pub mod analysis;
pub mod chart;
pub mod chat;
pub mod error;
pub mod generation;
pub mod notify;
pub mod transcription;
pub mod uploads;

pub use accounts::{Accounts, SignIn};
pub use analysis::{Analyses, AnalysisRequest, ANALYSIS_FALLBACK, ANALYSIS_SYSTEM_PROMPT};
pub use chart::{split_response, ExtractedAnalysis, CHART_MARKER};
pub use chat::{Conversations, REPLY_FALLBACK};
pub use error::OrchestratorError;
pub use generation::{Generation, GENERATION_FALLBACK, TEXT_SYSTEM_PROMPT};
pub use notify::Notifications;
pub use transcription::Transcriptions;
pub use uploads::{StoredUpload, Uploads};

#[cfg(test)]
pub(crate) mod test_util {
    use database::{user, Database, LazyDatabase, UserUpsert};

    /// Fresh in-memory database with migrations applied, wrapped for
    /// orchestrator use.
    pub async fn lazy_test_db() -> LazyDatabase {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        LazyDatabase::from_database(db)
    }

    /// Insert a user and return their id.
    pub async fn seed_user(db: &LazyDatabase) -> i64 {
        let pool = db.get().await.unwrap().pool();
        user::upsert_user(
            pool,
            &UserUpsert {
                open_id: "test-open-id".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .id
    }
}
