//! User account operations.
//!
//! Users are created and refreshed idempotently on each successful
//! authentication: the upsert is keyed on the external identity string,
//! only supplied fields overwrite stored values, and `last_signed_in`
//! is refreshed on every call.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{User, UserUpsert};

/// Insert or refresh a user keyed on `open_id`, returning the stored row.
///
/// On conflict, `None` fields leave existing values untouched and the
/// role is only overwritten when explicitly supplied. The external
/// identity string itself is never changed.
pub async fn upsert_user(pool: &SqlitePool, upsert: &UserUpsert) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (open_id, name, email, login_method, role)
        VALUES (?1, ?2, ?3, ?4, COALESCE(?5, 'user'))
        ON CONFLICT(open_id) DO UPDATE SET
            name = COALESCE(excluded.name, users.name),
            email = COALESCE(excluded.email, users.email),
            login_method = COALESCE(excluded.login_method, users.login_method),
            role = COALESCE(?5, users.role),
            last_signed_in = strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        RETURNING id, open_id, name, email, login_method, role,
                  created_at, updated_at, last_signed_in
        "#,
    )
    .bind(&upsert.open_id)
    .bind(&upsert.name)
    .bind(&upsert.email)
    .bind(&upsert.login_method)
    .bind(upsert.role)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by ID.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, open_id, name, email, login_method, role,
               created_at, updated_at, last_signed_in
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// Get a user by external identity string.
pub async fn get_user_by_open_id(pool: &SqlitePool, open_id: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, open_id, name, email, login_method, role,
               created_at, updated_at, last_signed_in
        FROM users
        WHERE open_id = ?
        "#,
    )
    .bind(open_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: open_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::test_util::test_db;

    #[tokio::test]
    async fn test_upsert_creates_with_defaults() {
        let db = test_db().await;

        let user = upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: "ext-1".to_string(),
                name: Some("Alice".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(user.open_id, "ext-1");
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.role, Role::User);
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn test_upsert_partial_update_preserves_fields() {
        let db = test_db().await;

        upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: "ext-2".to_string(),
                name: Some("Bob".to_string()),
                email: Some("bob@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // Second sign-in supplies only the login method.
        let user = upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: "ext-2".to_string(),
                login_method: Some("oauth".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(user.name.as_deref(), Some("Bob"));
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));
        assert_eq!(user.login_method.as_deref(), Some("oauth"));
    }

    #[tokio::test]
    async fn test_upsert_role_only_overwritten_when_supplied() {
        let db = test_db().await;

        let created = upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: "ext-3".to_string(),
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(created.role, Role::Admin);

        let refreshed = upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: "ext-3".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(refreshed.role, Role::Admin);
        assert_eq!(refreshed.id, created.id);
    }

    #[tokio::test]
    async fn test_get_user_by_open_id_not_found() {
        let db = test_db().await;
        let result = get_user_by_open_id(db.pool(), "missing").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
