//! Notification reads and state transitions, plus the best-effort
//! completion hook used by the producing orchestrators.

use database::{notification, Database, LazyDatabase, NewNotification, Notification};
use tracing::warn;

use crate::error::OrchestratorError;

/// Caller-facing notification operations.
#[derive(Debug, Clone)]
pub struct Notifications {
    db: LazyDatabase,
}

impl Notifications {
    pub fn new(db: LazyDatabase) -> Self {
        Self { db }
    }

    /// List a user's notifications, newest first.
    ///
    /// Degrades to an empty list when the store is unreachable.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Notification>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(Vec::new());
        };

        Ok(notification::list_notifications(db.pool(), user_id).await?)
    }

    /// Count a user's unread notifications.
    ///
    /// Degrades to zero when the store is unreachable.
    pub async fn unread_count(&self, user_id: i64) -> Result<i64, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(0);
        };

        Ok(notification::count_unread(db.pool(), user_id).await?)
    }

    /// Mark one of the user's notifications as read. Idempotent.
    pub async fn mark_read(&self, user_id: i64, id: i64) -> Result<(), OrchestratorError> {
        let db = self.db.require().await?;
        notification::mark_notification_read(db.pool(), id, user_id).await?;
        Ok(())
    }

    /// Delete one of the user's notifications.
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), OrchestratorError> {
        let db = self.db.require().await?;
        notification::delete_notification(db.pool(), id, user_id).await?;
        Ok(())
    }
}

/// Record a completion notification, best effort.
///
/// Called after the primary result row is already durable; a failure
/// here is logged and swallowed so it never fails the operation whose
/// completion it announces.
pub(crate) async fn record_completion(db: &Database, notification: NewNotification) {
    if let Err(e) = notification::create_notification(db.pool(), &notification).await {
        warn!("Failed to record completion notification: {}", e);
    }
}
