//! Role assignment service
//!
//! Assigns and removes roles on users, guarded by the `assign_roles`
//! permission. Validation runs before any lookup; both operations are
//! idempotent set mutations on the User↔Role join.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use warden_rbac::{Identity, Requirement, ASSIGN_ROLES};
use warden_store::AccessStore;

use crate::error::{AdminError, AdminResult};
use crate::guard::require;

/// Requirement declared by both assignment operations.
pub static ASSIGN_ROLE_REQUIREMENT: Requirement = Requirement::any(&[ASSIGN_ROLES]);

/// An assignment request as received from the caller.
///
/// Both IDs are required; either missing is a validation error raised
/// before any lookup is attempted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentRequest {
    /// Target user
    pub user_id: Option<Uuid>,

    /// Role to add or remove
    pub role_id: Option<Uuid>,
}

impl AssignmentRequest {
    /// Create a fully populated request.
    pub fn new(user_id: Uuid, role_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role_id: Some(role_id),
        }
    }

    fn validate(&self) -> AdminResult<(Uuid, Uuid)> {
        let user_id = self.user_id.ok_or(AdminError::MissingField { field: "user_id" })?;
        let role_id = self.role_id.ok_or(AdminError::MissingField { field: "role_id" })?;
        Ok((user_id, role_id))
    }
}

/// Confirmation returned to the caller for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentConfirmation {
    /// The affected role's name
    pub role_name: String,

    /// The affected user's email
    pub user_email: String,

    /// Human-readable confirmation
    pub message: String,
}

/// The role assignment service.
///
/// Each call affects exactly one `(user, role)` pair; there is no
/// multi-pair transaction.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use warden_admin::{AssignmentRequest, RoleAssignmentService};
/// use warden_rbac::Identity;
/// use warden_store::MemoryStore;
///
/// # async fn demo(caller: Identity, user_id: Uuid, role_id: Uuid) {
/// let service = RoleAssignmentService::new(Arc::new(MemoryStore::new()));
/// service.assign(&caller, AssignmentRequest::new(user_id, role_id)).await.unwrap();
/// # }
/// ```
pub struct RoleAssignmentService {
    store: Arc<dyn AccessStore>,
}

impl RoleAssignmentService {
    /// Create an assignment service over the given store.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// Assign a role to a user.
    ///
    /// Idempotent: assigning a role the user already has is a no-op
    /// success.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Unauthenticated`] / [`AdminError::Forbidden`]
    ///   when the caller fails the `assign_roles` guard
    /// - [`AdminError::MissingField`] if either ID is absent (raised
    ///   before any lookup)
    /// - [`AdminError::NotFound`] if the user or role does not exist
    pub async fn assign(
        &self,
        identity: &Identity,
        request: AssignmentRequest,
    ) -> AdminResult<AssignmentConfirmation> {
        require(identity, &ASSIGN_ROLE_REQUIREMENT)?;
        let (user_id, role_id) = request.validate()?;

        let user = self.store.user_by_id(user_id).await?;
        let role = self.store.role_by_id(role_id).await?;

        self.store.assign_role(user.id, role.id).await?;

        info!("Assigned role '{}' to user '{}'", role.name, user.email);
        Ok(AssignmentConfirmation {
            message: format!("Role '{}' assigned to user '{}'", role.name, user.email),
            role_name: role.name,
            user_email: user.email,
        })
    }

    /// Remove a role from a user.
    ///
    /// Idempotent: removing a role the user does not hold is a no-op
    /// success. Same guard and validation order as [`assign`].
    ///
    /// [`assign`]: RoleAssignmentService::assign
    pub async fn unassign(
        &self,
        identity: &Identity,
        request: AssignmentRequest,
    ) -> AdminResult<AssignmentConfirmation> {
        require(identity, &ASSIGN_ROLE_REQUIREMENT)?;
        let (user_id, role_id) = request.validate()?;

        let user = self.store.user_by_id(user_id).await?;
        let role = self.store.role_by_id(role_id).await?;

        self.store.unassign_role(user.id, role.id).await?;

        info!("Removed role '{}' from user '{}'", role.name, user.email);
        Ok(AssignmentConfirmation {
            message: format!("Role '{}' removed from user '{}'", role.name, user.email),
            role_name: role.name,
            user_email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_model::{Role, User};
    use warden_rbac::Subject;
    use warden_store::MemoryStore;

    fn assigner() -> Identity {
        Identity::Authenticated(
            Subject::new(Uuid::now_v7(), "admin@example.com")
                .with_grant("Администратор", [ASSIGN_ROLES]),
        )
    }

    async fn fixture() -> (Arc<MemoryStore>, RoleAssignmentService, User, Role) {
        let store = Arc::new(MemoryStore::new());
        let user = store.create_user(User::new("u@example.com", "h")).await.unwrap();
        let role = store.create_role(Role::new("Пользователь")).await.unwrap();
        let service = RoleAssignmentService::new(store.clone());
        (store, service, user, role)
    }

    #[tokio::test]
    async fn test_assign_returns_confirmation() {
        let (store, service, user, role) = fixture().await;

        let confirmation = service
            .assign(&assigner(), AssignmentRequest::new(user.id, role.id))
            .await
            .unwrap();

        assert_eq!(confirmation.role_name, "Пользователь");
        assert_eq!(confirmation.user_email, "u@example.com");
        assert_eq!(store.roles_of_user(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_assign_twice_is_noop() {
        let (store, service, user, role) = fixture().await;
        let request = AssignmentRequest::new(user.id, role.id);

        service.assign(&assigner(), request.clone()).await.unwrap();
        service.assign(&assigner(), request).await.unwrap();

        assert_eq!(store.roles_of_user(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unassign_never_held_is_noop() {
        let (store, service, user, role) = fixture().await;

        let confirmation = service
            .unassign(&assigner(), AssignmentRequest::new(user.id, role.id))
            .await
            .unwrap();

        assert_eq!(confirmation.role_name, "Пользователь");
        assert!(store.roles_of_user(user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_role_id_fails_before_lookup() {
        let (_, service, user, _) = fixture().await;

        // Nonexistent user_id with missing role_id: validation must win,
        // proving no lookup happened first.
        let request = AssignmentRequest {
            user_id: Some(user.id),
            role_id: None,
        };
        let err = service.assign(&assigner(), request).await.unwrap_err();
        assert!(matches!(err, AdminError::MissingField { field: "role_id" }));

        let request = AssignmentRequest {
            user_id: None,
            role_id: Some(Uuid::now_v7()),
        };
        let err = service.unassign(&assigner(), request).await.unwrap_err();
        assert!(matches!(err, AdminError::MissingField { field: "user_id" }));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (_, service, _, role) = fixture().await;

        let err = service
            .assign(&assigner(), AssignmentRequest::new(Uuid::now_v7(), role.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::NotFound { entity: "user" }));
    }

    #[tokio::test]
    async fn test_bare_user_is_forbidden() {
        let (_, service, user, role) = fixture().await;

        let caller = Identity::Authenticated(Subject::new(Uuid::now_v7(), "x@example.com"));
        let err = service
            .assign(&caller, AssignmentRequest::new(user.id, role.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Forbidden));
    }

    #[tokio::test]
    async fn test_anonymous_is_unauthenticated() {
        let (_, service, user, role) = fixture().await;

        let err = service
            .assign(&Identity::Anonymous, AssignmentRequest::new(user.id, role.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_superuser_may_assign() {
        let (store, service, user, role) = fixture().await;

        let root =
            Identity::Authenticated(Subject::new(Uuid::now_v7(), "root@example.com").superuser());
        service
            .assign(&root, AssignmentRequest::new(user.id, role.id))
            .await
            .unwrap();
        assert_eq!(store.roles_of_user(user.id).await.unwrap().len(), 1);
    }
}
