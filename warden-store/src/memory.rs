//! In-memory store implementation
//!
//! Suitable for single-process applications and testing. All tables
//! live behind one `RwLock`; every mutating call holds the write guard
//! for its whole duration, which gives each call the transactional
//! behavior the trait requires.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use warden_model::{Permission, Role, User};

use crate::error::{StoreError, StoreResult};
use crate::store::AccessStore;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    roles: HashMap<Uuid, Role>,
    permissions: HashMap<Uuid, Permission>,
    /// User↔Role join, unique on the pair
    user_roles: HashSet<(Uuid, Uuid)>,
    /// Role↔Permission join, unique on the pair
    role_permissions: HashSet<(Uuid, Uuid)>,
}

impl Tables {
    fn user(&self, id: Uuid) -> StoreResult<&User> {
        self.users.get(&id).ok_or(StoreError::not_found("user"))
    }

    fn role(&self, id: Uuid) -> StoreResult<&Role> {
        self.roles.get(&id).ok_or(StoreError::not_found("role"))
    }

    fn permission(&self, id: Uuid) -> StoreResult<&Permission> {
        self.permissions
            .get(&id)
            .ok_or(StoreError::not_found("permission"))
    }
}

/// In-memory `AccessStore` implementation.
///
/// # Example
///
/// ```rust,no_run
/// use warden_store::MemoryStore;
///
/// let store = MemoryStore::new();
/// ```
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate("user", &user.email));
        }

        info!("Created user '{}'", user.email);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> StoreResult<User> {
        let tables = self.tables.read().await;
        tables.user(id).cloned()
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<User> {
        let tables = self.tables.read().await;
        tables
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::not_found("user"))
    }

    async fn update_user(&self, user: User) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        tables.user(user.id)?;

        if tables
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::duplicate("user", &user.email));
        }

        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_role(&self, role: Role) -> StoreResult<Role> {
        let mut tables = self.tables.write().await;

        if tables.roles.values().any(|r| r.name == role.name) {
            return Err(StoreError::duplicate("role", &role.name));
        }

        info!("Created role '{}'", role.name);
        tables.roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn role_by_id(&self, id: Uuid) -> StoreResult<Role> {
        let tables = self.tables.read().await;
        tables.role(id).cloned()
    }

    async fn role_by_name(&self, name: &str) -> StoreResult<Role> {
        let tables = self.tables.read().await;
        tables
            .roles
            .values()
            .find(|r| r.name == name)
            .cloned()
            .ok_or(StoreError::not_found("role"))
    }

    async fn update_role(&self, role: Role) -> StoreResult<Role> {
        let mut tables = self.tables.write().await;
        tables.role(role.id)?;

        if tables
            .roles
            .values()
            .any(|r| r.id != role.id && r.name == role.name)
        {
            return Err(StoreError::duplicate("role", &role.name));
        }

        tables.roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn delete_role(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let role = tables.roles.remove(&id).ok_or(StoreError::not_found("role"))?;

        // Cascade out of both joins
        tables.user_roles.retain(|(_, role_id)| *role_id != id);
        tables.role_permissions.retain(|(role_id, _)| *role_id != id);

        info!("Deleted role '{}'", role.name);
        Ok(())
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        let tables = self.tables.read().await;
        let mut roles: Vec<Role> = tables.roles.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn create_permission(&self, permission: Permission) -> StoreResult<Permission> {
        let mut tables = self.tables.write().await;

        if tables
            .permissions
            .values()
            .any(|p| p.name == permission.name)
        {
            return Err(StoreError::duplicate("permission", &permission.name));
        }

        info!("Created permission '{}'", permission.name);
        tables.permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    async fn permission_by_id(&self, id: Uuid) -> StoreResult<Permission> {
        let tables = self.tables.read().await;
        tables.permission(id).cloned()
    }

    async fn permission_by_name(&self, name: &str) -> StoreResult<Permission> {
        let tables = self.tables.read().await;
        tables
            .permissions
            .values()
            .find(|p| p.name == name)
            .cloned()
            .ok_or(StoreError::not_found("permission"))
    }

    async fn update_permission(&self, permission: Permission) -> StoreResult<Permission> {
        let mut tables = self.tables.write().await;
        tables.permission(permission.id)?;

        if tables
            .permissions
            .values()
            .any(|p| p.id != permission.id && p.name == permission.name)
        {
            return Err(StoreError::duplicate("permission", &permission.name));
        }

        tables.permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    async fn delete_permission(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let permission = tables
            .permissions
            .remove(&id)
            .ok_or(StoreError::not_found("permission"))?;

        // Cascade out of every role referencing it
        tables.role_permissions.retain(|(_, perm_id)| *perm_id != id);

        info!("Deleted permission '{}'", permission.name);
        Ok(())
    }

    async fn list_permissions(&self) -> StoreResult<Vec<Permission>> {
        let tables = self.tables.read().await;
        let mut permissions: Vec<Permission> = tables.permissions.values().cloned().collect();
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }

    async fn assign_role(&self, user_id: Uuid, role_id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.user(user_id)?;
        tables.role(role_id)?;

        let inserted = tables.user_roles.insert((user_id, role_id));
        debug!(%user_id, %role_id, inserted, "assign_role");
        Ok(())
    }

    async fn unassign_role(&self, user_id: Uuid, role_id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.user(user_id)?;
        tables.role(role_id)?;

        let removed = tables.user_roles.remove(&(user_id, role_id));
        debug!(%user_id, %role_id, removed, "unassign_role");
        Ok(())
    }

    async fn roles_of_user(&self, user_id: Uuid) -> StoreResult<Vec<Role>> {
        let tables = self.tables.read().await;
        tables.user(user_id)?;

        let mut roles: Vec<Role> = tables
            .user_roles
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, role_id)| tables.roles.get(role_id))
            .cloned()
            .collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn set_role_permissions(
        &self,
        role_id: Uuid,
        permission_ids: &[Uuid],
    ) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.role(role_id)?;
        for perm_id in permission_ids {
            tables.permission(*perm_id)?;
        }

        tables.role_permissions.retain(|(rid, _)| *rid != role_id);
        for perm_id in permission_ids {
            tables.role_permissions.insert((role_id, *perm_id));
        }
        Ok(())
    }

    async fn permissions_of_role(&self, role_id: Uuid) -> StoreResult<Vec<Permission>> {
        let tables = self.tables.read().await;
        tables.role(role_id)?;

        let mut permissions: Vec<Permission> = tables
            .role_permissions
            .iter()
            .filter(|(rid, _)| *rid == role_id)
            .filter_map(|(_, perm_id)| tables.permissions.get(perm_id))
            .cloned()
            .collect();
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }
}
