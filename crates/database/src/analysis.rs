//! Data-analysis CRUD operations.
//!
//! The `chart_data` column is an opaque string: validity of the chart
//! specification is checked once at extraction time, never on read.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Analysis, NewAnalysis};

/// Record a completed analysis, returning its id.
pub async fn create_analysis(pool: &SqlitePool, analysis: &NewAnalysis) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO data_analyses
            (user_id, title, data_url, file_name, file_type, raw_data, analysis, chart_data)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(analysis.user_id)
    .bind(&analysis.title)
    .bind(&analysis.data_url)
    .bind(&analysis.file_name)
    .bind(&analysis.file_type)
    .bind(&analysis.raw_data)
    .bind(&analysis.analysis)
    .bind(&analysis.chart_data)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List a user's analyses, newest first.
pub async fn list_analyses(pool: &SqlitePool, user_id: i64) -> Result<Vec<Analysis>> {
    let rows = sqlx::query_as::<_, Analysis>(
        r#"
        SELECT id, user_id, title, data_url, file_name, file_type,
               raw_data, analysis, chart_data, created_at
        FROM data_analyses
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get an analysis owned by the given user.
pub async fn get_analysis(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Analysis> {
    sqlx::query_as::<_, Analysis>(
        r#"
        SELECT id, user_id, title, data_url, file_name, file_type,
               raw_data, analysis, chart_data, created_at
        FROM data_analyses
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Analysis",
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_db;

    fn sample(user_id: i64) -> NewAnalysis {
        NewAnalysis {
            user_id,
            title: "Q3 sales".to_string(),
            raw_data: Some("month,revenue\nJul,10\nAug,12".to_string()),
            analysis: "Revenue grew month over month.".to_string(),
            chart_data: Some(r#"{"type":"bar"}"#.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_db().await;

        let id = create_analysis(db.pool(), &sample(1)).await.unwrap();
        let row = get_analysis(db.pool(), id, 1).await.unwrap();

        assert_eq!(row.title, "Q3 sales");
        assert_eq!(row.chart_data.as_deref(), Some(r#"{"type":"bar"}"#));
        assert!(row.data_url.is_none());
    }

    #[tokio::test]
    async fn test_get_enforces_ownership() {
        let db = test_db().await;

        let id = create_analysis(db.pool(), &sample(1)).await.unwrap();
        let result = get_analysis(db.pool(), id, 2).await;

        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
