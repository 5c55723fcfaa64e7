//! Account synchronization on successful authentication.

use database::{user, LazyDatabase, Role, User, UserUpsert};
use tracing::info;

use crate::error::OrchestratorError;

/// Profile fields reported by the authentication subsystem after a
/// successful sign-in.
#[derive(Debug, Clone, Default)]
pub struct SignIn {
    /// External identity string. Required.
    pub open_id: String,
    /// Display name, if the provider reported one.
    pub name: Option<String>,
    /// Email address, if the provider reported one.
    pub email: Option<String>,
    /// Login method (oauth provider, etc.), if known.
    pub login_method: Option<String>,
}

/// Keeps user accounts in sync with the authentication subsystem.
///
/// Accounts are upserted idempotently on every successful sign-in. One
/// designated owner identity is promoted to admin; everyone else keeps
/// the default role.
#[derive(Debug, Clone)]
pub struct Accounts {
    db: LazyDatabase,
    owner_open_id: Option<String>,
}

impl Accounts {
    /// Create an account synchronizer with no designated owner.
    pub fn new(db: LazyDatabase) -> Self {
        Self {
            db,
            owner_open_id: None,
        }
    }

    /// Designate the owner identity that is promoted to admin.
    pub fn with_owner(mut self, open_id: impl Into<String>) -> Self {
        self.owner_open_id = Some(open_id.into());
        self
    }

    /// Record a successful sign-in, creating or refreshing the account.
    pub async fn record_sign_in(&self, sign_in: SignIn) -> Result<User, OrchestratorError> {
        if sign_in.open_id.trim().is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "open_id is required".to_string(),
            ));
        }

        let role = match &self.owner_open_id {
            Some(owner) if *owner == sign_in.open_id => Some(Role::Admin),
            _ => None,
        };

        let db = self.db.require().await?;
        let user = user::upsert_user(
            db.pool(),
            &UserUpsert {
                open_id: sign_in.open_id,
                name: sign_in.name,
                email: sign_in.email,
                login_method: sign_in.login_method,
                role,
            },
        )
        .await?;

        info!("Recorded sign-in for user {} ({:?})", user.id, user.role);
        Ok(user)
    }

    /// Look up an account by external identity.
    ///
    /// Degrades to `None` both for unknown identities and when the
    /// store is unreachable, so session resolution never hard-fails.
    pub async fn find(&self, open_id: &str) -> Result<Option<User>, OrchestratorError> {
        let Some(db) = self.db.get().await else {
            return Ok(None);
        };

        match user::get_user_by_open_id(db.pool(), open_id).await {
            Ok(user) => Ok(Some(user)),
            Err(database::DatabaseError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
