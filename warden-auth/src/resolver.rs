//! Identity resolution
//!
//! Builds the [`Identity`] snapshot the engine decides over: the user
//! record plus every granted role with its permission names, captured
//! at resolution time.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use warden_rbac::{Identity, Subject};
use warden_store::AccessStore;

use crate::error::{AuthError, AuthResult};

/// Store-backed identity resolver.
///
/// Soft-deleted and deactivated accounts are rejected here, at every
/// resolution point — not only at login. A session that outlives its
/// account stops resolving the moment the account is deleted.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use warden_auth::IdentityResolver;
/// use warden_store::MemoryStore;
///
/// let resolver = IdentityResolver::new(Arc::new(MemoryStore::new()));
/// ```
pub struct IdentityResolver {
    store: Arc<dyn AccessStore>,
}

impl IdentityResolver {
    /// Create a resolver over the given store.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// Resolve a user ID into an identity snapshot.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotFound`] if the user does not exist
    /// - [`AuthError::AccountDeleted`] for soft-deleted accounts
    /// - [`AuthError::AccountDisabled`] for deactivated accounts
    pub async fn resolve(&self, user_id: Uuid) -> AuthResult<Identity> {
        let user = self.store.user_by_id(user_id).await?;
        self.snapshot(user.id, &user.email, user.is_superuser, user.is_deleted, user.is_active)
            .await
    }

    /// Resolve an email address into an identity snapshot.
    pub async fn resolve_email(&self, email: &str) -> AuthResult<Identity> {
        let user = self.store.user_by_email(email).await?;
        self.snapshot(user.id, &user.email, user.is_superuser, user.is_deleted, user.is_active)
            .await
    }

    async fn snapshot(
        &self,
        user_id: Uuid,
        email: &str,
        is_superuser: bool,
        is_deleted: bool,
        is_active: bool,
    ) -> AuthResult<Identity> {
        if is_deleted {
            return Err(AuthError::AccountDeleted);
        }
        if !is_active {
            return Err(AuthError::AccountDisabled);
        }

        let mut subject = Subject::new(user_id, email);
        if is_superuser {
            subject = subject.superuser();
        }

        for role in self.store.roles_of_user(user_id).await? {
            let permissions = self.store.permissions_of_role(role.id).await?;
            subject = subject.with_grant(role.name, permissions.into_iter().map(|p| p.name));
        }

        debug!(%user_id, grants = subject.grants.len(), "Resolved identity");
        Ok(Identity::Authenticated(subject))
    }
}
