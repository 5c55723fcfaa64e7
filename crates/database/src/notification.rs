//! Notification CRUD operations.
//!
//! The read flag transitions only unread to read; marking an already
//! read notification again is a no-op, not an error.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{NewNotification, Notification};

/// Record a notification, returning its id.
pub async fn create_notification(pool: &SqlitePool, notification: &NewNotification) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO notifications (user_id, kind, title, content, related_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(notification.user_id)
    .bind(notification.kind)
    .bind(&notification.title)
    .bind(&notification.content)
    .bind(notification.related_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List a user's notifications, newest first.
pub async fn list_notifications(pool: &SqlitePool, user_id: i64) -> Result<Vec<Notification>> {
    let rows = sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, kind, title, content, is_read, related_id, created_at
        FROM notifications
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Mark a notification as read. Idempotent.
pub async fn mark_notification_read(pool: &SqlitePool, id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET is_read = 1
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Notification",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a notification owned by the given user.
pub async fn delete_notification(pool: &SqlitePool, id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM notifications
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Notification",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Count a user's unread notifications.
pub async fn count_unread(pool: &SqlitePool, user_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM notifications
        WHERE user_id = ? AND is_read = 0
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::test_util::test_db;

    fn sample(user_id: i64, related_id: Option<i64>) -> NewNotification {
        NewNotification {
            user_id,
            kind: NotificationKind::AnalysisComplete,
            title: "Analysis ready".to_string(),
            content: "Your analysis finished.".to_string(),
            related_id,
        }
    }

    #[tokio::test]
    async fn test_mark_read_idempotent() {
        let db = test_db().await;
        let id = create_notification(db.pool(), &sample(1, Some(7)))
            .await
            .unwrap();

        mark_notification_read(db.pool(), id, 1).await.unwrap();
        mark_notification_read(db.pool(), id, 1).await.unwrap();

        let rows = list_notifications(db.pool(), 1).await.unwrap();
        assert!(rows[0].is_read);
        assert_eq!(rows[0].related_id, Some(7));
    }

    #[tokio::test]
    async fn test_unread_count() {
        let db = test_db().await;

        let first = create_notification(db.pool(), &sample(1, None)).await.unwrap();
        create_notification(db.pool(), &sample(1, None)).await.unwrap();
        create_notification(db.pool(), &sample(2, None)).await.unwrap();

        assert_eq!(count_unread(db.pool(), 1).await.unwrap(), 2);

        mark_notification_read(db.pool(), first, 1).await.unwrap();
        assert_eq!(count_unread(db.pool(), 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_read_enforces_ownership() {
        let db = test_db().await;
        let id = create_notification(db.pool(), &sample(1, None))
            .await
            .unwrap();

        let result = mark_notification_read(db.pool(), id, 2).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
        assert_eq!(count_unread(db.pool(), 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let id = create_notification(db.pool(), &sample(1, None))
            .await
            .unwrap();

        delete_notification(db.pool(), id, 1).await.unwrap();
        assert!(list_notifications(db.pool(), 1).await.unwrap().is_empty());

        let again = delete_notification(db.pool(), id, 1).await;
        assert!(matches!(again, Err(DatabaseError::NotFound { .. })));
    }
}
