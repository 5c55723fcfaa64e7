//! Generated-content CRUD operations.
//!
//! Rows exist only for completed generations: the orchestration layer
//! persists after the gateway call succeeds, never before.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{ContentKind, GeneratedContent};

/// Record a completed generation, returning its id.
pub async fn create_generated_content(
    pool: &SqlitePool,
    user_id: i64,
    kind: ContentKind,
    prompt: &str,
    result: &str,
) -> Result<i64> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO generated_content (user_id, kind, prompt, result)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(kind)
    .bind(prompt)
    .bind(result)
    .execute(pool)
    .await?;

    Ok(inserted.last_insert_rowid())
}

/// Get a generated-content row owned by the given user.
pub async fn get_generated_content(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<GeneratedContent> {
    sqlx::query_as::<_, GeneratedContent>(
        r#"
        SELECT id, user_id, kind, prompt, result, created_at
        FROM generated_content
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "GeneratedContent",
        id: id.to_string(),
    })
}

/// List a user's generated content, newest first, optionally filtered by kind.
pub async fn list_generated_content(
    pool: &SqlitePool,
    user_id: i64,
    kind: Option<ContentKind>,
) -> Result<Vec<GeneratedContent>> {
    let rows = match kind {
        Some(kind) => {
            sqlx::query_as::<_, GeneratedContent>(
                r#"
                SELECT id, user_id, kind, prompt, result, created_at
                FROM generated_content
                WHERE user_id = ? AND kind = ?
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .bind(user_id)
            .bind(kind)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, GeneratedContent>(
                r#"
                SELECT id, user_id, kind, prompt, result, created_at
                FROM generated_content
                WHERE user_id = ?
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}
