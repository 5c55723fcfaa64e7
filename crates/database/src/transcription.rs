//! Transcription CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Transcription;

/// Record a completed transcription, returning its id.
pub async fn create_transcription(
    pool: &SqlitePool,
    user_id: i64,
    audio_url: &str,
    transcription: &str,
    language: Option<&str>,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO transcriptions (user_id, audio_url, transcription, language)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(audio_url)
    .bind(transcription)
    .bind(language)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a transcription owned by the given user.
pub async fn get_transcription(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Transcription> {
    sqlx::query_as::<_, Transcription>(
        r#"
        SELECT id, user_id, audio_url, transcription, language, created_at
        FROM transcriptions
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Transcription",
        id: id.to_string(),
    })
}

/// List a user's transcriptions, newest first.
pub async fn list_transcriptions(pool: &SqlitePool, user_id: i64) -> Result<Vec<Transcription>> {
    let rows = sqlx::query_as::<_, Transcription>(
        r#"
        SELECT id, user_id, audio_url, transcription, language, created_at
        FROM transcriptions
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_db;

    #[tokio::test]
    async fn test_create_and_list() {
        let db = test_db().await;

        create_transcription(
            db.pool(),
            1,
            "https://cdn.example.com/memo.ogg",
            "hello world",
            Some("en"),
        )
        .await
        .unwrap();
        create_transcription(db.pool(), 1, "https://cdn.example.com/next.ogg", "bonjour", None)
            .await
            .unwrap();

        let rows = list_transcriptions(db.pool(), 1).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].language.as_deref(), Some("en"));
        assert!(rows[0].language.is_none());

        assert!(list_transcriptions(db.pool(), 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_scoped_to_owner() {
        let db = test_db().await;

        let id = create_transcription(db.pool(), 1, "https://a/b.ogg", "hi", None)
            .await
            .unwrap();

        let row = get_transcription(db.pool(), id, 1).await.unwrap();
        assert_eq!(row.transcription, "hi");

        let result = get_transcription(db.pool(), id, 2).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
