//! Conversation CRUD operations.
//!
//! Every per-user read and delete binds the owner id in its WHERE
//! clause, so a conversation belonging to someone else behaves exactly
//! like a missing one.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Conversation;

/// Create a conversation for a user, returning its id.
pub async fn create_conversation(pool: &SqlitePool, user_id: i64, title: &str) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO conversations (user_id, title)
        VALUES (?, ?)
        "#,
    )
    .bind(user_id)
    .bind(title)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List a user's conversations, most recently updated first.
pub async fn list_conversations(pool: &SqlitePool, user_id: i64) -> Result<Vec<Conversation>> {
    let conversations = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM conversations
        WHERE user_id = ?
        ORDER BY updated_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(conversations)
}

/// Get a conversation owned by the given user.
pub async fn get_conversation(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Conversation> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM conversations
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Conversation",
        id: id.to_string(),
    })
}

/// Refresh a conversation's `updated_at` timestamp.
///
/// Called by the orchestration layer after appending a message; the
/// message write itself never touches the conversation row.
pub async fn touch_conversation(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a conversation row owned by the given user.
///
/// Deletes only the conversation itself; callers must delete its
/// messages first (see `message::delete_conversation_messages`).
pub async fn delete_conversation(pool: &SqlitePool, id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM conversations
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_db;

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_db().await;

        let id = create_conversation(db.pool(), 1, "Test").await.unwrap();
        let conversation = get_conversation(db.pool(), id, 1).await.unwrap();

        assert_eq!(conversation.title, "Test");
        assert_eq!(conversation.user_id, 1);
    }

    #[tokio::test]
    async fn test_get_enforces_ownership() {
        let db = test_db().await;

        let id = create_conversation(db.pool(), 1, "Mine").await.unwrap();
        let result = get_conversation(db.pool(), id, 2).await;

        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_ordered_by_recency() {
        let db = test_db().await;

        let first = create_conversation(db.pool(), 1, "First").await.unwrap();
        let second = create_conversation(db.pool(), 1, "Second").await.unwrap();

        // Touching the older conversation moves it to the front. The
        // sleep keeps the touch in a later millisecond than the inserts.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        touch_conversation(db.pool(), first).await.unwrap();

        let conversations = list_conversations(db.pool(), 1).await.unwrap();
        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0].id, first);
        assert_eq!(conversations[1].id, second);
    }

    #[tokio::test]
    async fn test_delete_enforces_ownership() {
        let db = test_db().await;

        let id = create_conversation(db.pool(), 1, "Keep").await.unwrap();
        let result = delete_conversation(db.pool(), id, 2).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));

        // Still present for the owner.
        assert!(get_conversation(db.pool(), id, 1).await.is_ok());
    }
}
