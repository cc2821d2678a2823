//! The persistence seam
//!
//! This module defines the `AccessStore` trait the resolver and the
//! management services depend on. Implementations must make each
//! mutating call atomic: an `assign_role` and a concurrent
//! `unassign_role` on the same pair have to serialize.

use async_trait::async_trait;
use uuid::Uuid;

use warden_model::{Permission, Role, User};

use crate::error::StoreResult;

/// Storage operations for users, roles, permissions, and their joins.
///
/// Lookups are by ID or by the unique name key (email for users).
/// Creates enforce name uniqueness and fail with
/// [`StoreError::DuplicateName`](crate::StoreError::DuplicateName)
/// rather than silently merging.
#[async_trait]
pub trait AccessStore: Send + Sync {
    // --- Users ---

    /// Persist a new user. Fails on duplicate email.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Look up a user by ID.
    async fn user_by_id(&self, id: Uuid) -> StoreResult<User>;

    /// Look up a user by email.
    async fn user_by_email(&self, email: &str) -> StoreResult<User>;

    /// Replace a stored user record (matched by ID).
    async fn update_user(&self, user: User) -> StoreResult<User>;

    // --- Roles ---

    /// Persist a new role. Fails on duplicate name.
    async fn create_role(&self, role: Role) -> StoreResult<Role>;

    /// Look up a role by ID.
    async fn role_by_id(&self, id: Uuid) -> StoreResult<Role>;

    /// Look up a role by name.
    async fn role_by_name(&self, name: &str) -> StoreResult<Role>;

    /// Replace a stored role record (matched by ID). Fails if the new
    /// name collides with another role.
    async fn update_role(&self, role: Role) -> StoreResult<Role>;

    /// Delete a role. Cascades removal from every user holding it.
    async fn delete_role(&self, id: Uuid) -> StoreResult<()>;

    /// List all roles.
    async fn list_roles(&self) -> StoreResult<Vec<Role>>;

    // --- Permissions ---

    /// Persist a new permission. Fails on duplicate name.
    async fn create_permission(&self, permission: Permission) -> StoreResult<Permission>;

    /// Look up a permission by ID.
    async fn permission_by_id(&self, id: Uuid) -> StoreResult<Permission>;

    /// Look up a permission by name.
    async fn permission_by_name(&self, name: &str) -> StoreResult<Permission>;

    /// Replace a stored permission record (matched by ID). Fails if the
    /// new name collides with another permission.
    async fn update_permission(&self, permission: Permission) -> StoreResult<Permission>;

    /// Delete a permission. Cascades removal from every role
    /// referencing it.
    async fn delete_permission(&self, id: Uuid) -> StoreResult<()>;

    /// List all permissions.
    async fn list_permissions(&self) -> StoreResult<Vec<Permission>>;

    // --- User↔Role join ---

    /// Add `(user_id, role_id)` to the join. Set semantics: adding an
    /// existing pair is a no-op success. Fails if either side is
    /// missing.
    async fn assign_role(&self, user_id: Uuid, role_id: Uuid) -> StoreResult<()>;

    /// Remove `(user_id, role_id)` from the join. Set semantics:
    /// removing an absent pair is a no-op success. Fails if either side
    /// is missing.
    async fn unassign_role(&self, user_id: Uuid, role_id: Uuid) -> StoreResult<()>;

    /// All roles currently assigned to a user.
    async fn roles_of_user(&self, user_id: Uuid) -> StoreResult<Vec<Role>>;

    // --- Role↔Permission join ---

    /// Replace a role's permission set with exactly the given
    /// permission IDs. Fails if the role or any permission is missing.
    async fn set_role_permissions(&self, role_id: Uuid, permission_ids: &[Uuid])
        -> StoreResult<()>;

    /// All permissions currently attached to a role.
    async fn permissions_of_role(&self, role_id: Uuid) -> StoreResult<Vec<Permission>>;
}
