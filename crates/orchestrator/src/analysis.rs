//! Tabular data analysis orchestration.
//!
//! The assistant is prompted to answer in two labeled sections; the
//! [`crate::chart`] extractor then splits the raw response into
//! analysis text and an optional chart specification. Everything is
//! persisted in a single row after the gateway call succeeds.

use std::sync::Arc;

use database::{
    analysis, Analysis, LazyDatabase, NewAnalysis, NewNotification, NotificationKind,
};
use gateway_core::{ChatGateway, ChatTurn};
use tracing::{info, warn};

use crate::chart;
use crate::error::OrchestratorError;
use crate::notify;

/// System prompt framing the data analyst.
pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a professional data analyst. Analyze the provided data and answer in two \
     sections. Start the first section with \"Analysis Result:\" followed by your findings. \
     Start the second section with \"Chart Configuration:\" followed by a single JSON object \
     describing a chart for the data, with \"type\", \"labels\" and \"datasets\" fields.";

/// Analysis text stored when the assistant returns no usable text.
pub const ANALYSIS_FALLBACK: &str = "Analysis failed.";

/// Caller-supplied inputs for one analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Title for the stored record. Required.
    pub title: String,
    /// Raw tabular data (CSV or similar text). Required.
    pub data: String,
    /// Durable URL of the uploaded source file, if any.
    pub data_url: Option<String>,
    /// Original file name, if a file was uploaded.
    pub file_name: Option<String>,
    /// Original content type, if a file was uploaded.
    pub file_type: Option<String>,
}

/// Caller-facing analysis operations.
#[derive(Clone)]
pub struct Analyses {
    db: LazyDatabase,
    chat: Arc<dyn ChatGateway>,
    notify: bool,
}

impl Analyses {
    pub fn new(db: LazyDatabase, chat: Arc<dyn ChatGateway>) -> Self {
        Self {
            db,
            chat,
            notify: false,
        }
    }

    /// Enable or disable completion notifications.
    pub fn with_notifications(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Run an analysis over raw tabular data and persist the result.
    ///
    /// The stored analysis text is never empty: an empty or missing
    /// completion stores the fallback text instead.
    pub async fn analyze(
        &self,
        user_id: i64,
        request: AnalysisRequest,
    ) -> Result<Analysis, OrchestratorError> {
        if request.title.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "title is required".to_string(),
            ));
        }
        if request.data.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "data is required".to_string(),
            ));
        }

        let turns = [
            ChatTurn::system(ANALYSIS_SYSTEM_PROMPT),
            ChatTurn::user(format!(
                "Analyze the following data (\"{}\"):\n\n{}",
                request.title, request.data
            )),
        ];
        let response = self.chat.complete(&turns).await?;
        let raw = match response.text() {
            Some(text) => text.to_string(),
            None => {
                warn!("Analysis returned no text for user {}", user_id);
                ANALYSIS_FALLBACK.to_string()
            }
        };

        let extracted = chart::split_response(&raw);
        let analysis_text = if extracted.analysis.is_empty() {
            ANALYSIS_FALLBACK.to_string()
        } else {
            extracted.analysis
        };

        let db = self.db.require().await?;
        let id = analysis::create_analysis(
            db.pool(),
            &NewAnalysis {
                user_id,
                title: request.title.clone(),
                data_url: request.data_url,
                file_name: request.file_name,
                file_type: request.file_type,
                raw_data: Some(request.data),
                analysis: analysis_text,
                chart_data: extracted.chart,
            },
        )
        .await?;

        info!("Stored analysis {} for user {}", id, user_id);

        if self.notify {
            notify::record_completion(
                db,
                NewNotification {
                    user_id,
                    kind: NotificationKind::AnalysisComplete,
                    title: "Analysis complete".to_string(),
                    content: format!("Your analysis \"{}\" has finished.", request.title),
                    related_id: Some(id),
                },
            )
            .await;
        }

        Ok(analysis::get_analysis(db.pool(), id, user_id).await?)
    }

    /// List a user's analyses, newest first.
    ///
    /// Degrades to an empty list when the store is unreachable.
    pub async fn history(&self, user_id: i64) -> Result<Vec<Analysis>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        Ok(analysis::list_analyses(db.pool(), user_id).await?)
    }

    /// Get one of the user's analyses by id.
    pub async fn get(&self, user_id: i64, id: i64) -> Result<Analysis, OrchestratorError> {
        let db = self.db.require().await?;
        Ok(analysis::get_analysis(db.pool(), id, user_id).await?)
    }
}
