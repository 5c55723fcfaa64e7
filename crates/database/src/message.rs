//! Message CRUD operations.
//!
//! Messages are append-only: created on send and on assistant reply,
//! never updated, deleted only when their conversation is deleted.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Message, MessageRole};

/// Append a message to a conversation, returning its id.
pub async fn create_message(
    pool: &SqlitePool,
    conversation_id: i64,
    role: MessageRole,
    content: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO messages (conversation_id, role, content)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(conversation_id)
    .bind(role)
    .bind(content)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List a conversation's messages, oldest first.
///
/// The id tie-break keeps ordering stable for messages created within
/// the same millisecond.
pub async fn list_messages(pool: &SqlitePool, conversation_id: i64) -> Result<Vec<Message>> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, conversation_id, role, content, created_at
        FROM messages
        WHERE conversation_id = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Delete all messages belonging to a conversation, returning the count.
///
/// Called before the conversation row itself is deleted so no orphaned
/// messages remain.
pub async fn delete_conversation_messages(pool: &SqlitePool, conversation_id: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM messages
        WHERE conversation_id = ?
        "#,
    )
    .bind(conversation_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::create_conversation;
    use crate::test_util::test_db;

    #[tokio::test]
    async fn test_messages_ordered_oldest_first() {
        let db = test_db().await;
        let conversation = create_conversation(db.pool(), 1, "Chat").await.unwrap();

        create_message(db.pool(), conversation, MessageRole::User, "one")
            .await
            .unwrap();
        create_message(db.pool(), conversation, MessageRole::Assistant, "two")
            .await
            .unwrap();
        create_message(db.pool(), conversation, MessageRole::User, "three")
            .await
            .unwrap();

        let messages = list_messages(db.pool(), conversation).await.unwrap();
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);

        for pair in messages.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_delete_conversation_messages() {
        let db = test_db().await;
        let conversation = create_conversation(db.pool(), 1, "Chat").await.unwrap();

        for i in 0..4 {
            create_message(db.pool(), conversation, MessageRole::User, &format!("m{}", i))
                .await
                .unwrap();
        }

        let deleted = delete_conversation_messages(db.pool(), conversation)
            .await
            .unwrap();
        assert_eq!(deleted, 4);

        let remaining = list_messages(db.pool(), conversation).await.unwrap();
        assert!(remaining.is_empty());
    }
}
