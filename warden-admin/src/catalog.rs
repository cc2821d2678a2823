//! Role and permission catalogs
//!
//! Management CRUD over the role and permission entities, each guarded
//! by its own declared requirement. Permission names are immutable once
//! created: handlers and roles reference permissions by name, so
//! updates may change only the description.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use warden_model::{Permission, Role};
use warden_rbac::{Identity, Requirement, MANAGE_PERMISSIONS, MANAGE_ROLES};
use warden_store::AccessStore;

use crate::error::{AdminError, AdminResult};
use crate::guard::require;

/// Requirement declared by every permission catalog operation.
pub static MANAGE_PERMISSIONS_REQUIREMENT: Requirement = Requirement::any(&[MANAGE_PERMISSIONS]);

/// Requirement declared by every role catalog operation.
pub static MANAGE_ROLES_REQUIREMENT: Requirement = Requirement::any(&[MANAGE_ROLES]);

/// Request to create a permission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePermission {
    /// Unique code name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

/// Request to update a permission. The name is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePermission {
    /// New description
    pub description: Option<String>,
}

/// Request to create a role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRole {
    /// Unique role name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Permissions to attach, by ID
    #[serde(default)]
    pub permission_ids: Vec<Uuid>,
}

/// Request to update a role. `None` fields are left unchanged;
/// `permission_ids` replaces the whole set when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRole {
    /// New role name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// Replacement permission set, by ID
    pub permission_ids: Option<Vec<Uuid>>,
}

/// A role with its attached permissions resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RoleDetail {
    /// The role entity
    #[serde(flatten)]
    pub role: Role,

    /// The role's permissions
    pub permissions: Vec<Permission>,
}

/// Permission catalog management; every operation declares
/// [`MANAGE_PERMISSIONS_REQUIREMENT`].
pub struct PermissionCatalog {
    store: Arc<dyn AccessStore>,
}

impl PermissionCatalog {
    /// Create a permission catalog over the given store.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// List all permissions.
    pub async fn list(&self, identity: &Identity) -> AdminResult<Vec<Permission>> {
        require(identity, &MANAGE_PERMISSIONS_REQUIREMENT)?;
        Ok(self.store.list_permissions().await?)
    }

    /// Fetch one permission by ID.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AdminResult<Permission> {
        require(identity, &MANAGE_PERMISSIONS_REQUIREMENT)?;
        Ok(self.store.permission_by_id(id).await?)
    }

    /// Create a permission.
    ///
    /// # Errors
    ///
    /// - [`AdminError::MissingField`] if the name is empty
    /// - [`AdminError::Conflict`] on a duplicate name; the existing
    ///   permission is never silently merged
    pub async fn create(
        &self,
        identity: &Identity,
        request: CreatePermission,
    ) -> AdminResult<Permission> {
        require(identity, &MANAGE_PERMISSIONS_REQUIREMENT)?;
        if request.name.is_empty() {
            return Err(AdminError::MissingField { field: "name" });
        }

        let permission = self
            .store
            .create_permission(Permission::new(request.name, request.description))
            .await?;
        Ok(permission)
    }

    /// Update a permission's description. The name is the stable key
    /// referenced by handlers and roles and cannot change.
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        request: UpdatePermission,
    ) -> AdminResult<Permission> {
        require(identity, &MANAGE_PERMISSIONS_REQUIREMENT)?;

        let mut permission = self.store.permission_by_id(id).await?;
        if let Some(description) = request.description {
            permission.description = description;
        }
        Ok(self.store.update_permission(permission).await?)
    }

    /// Delete a permission, cascading its removal from every role.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> AdminResult<()> {
        require(identity, &MANAGE_PERMISSIONS_REQUIREMENT)?;
        self.store.delete_permission(id).await?;
        info!(%id, "Permission deleted");
        Ok(())
    }
}

/// Role catalog management; every operation declares
/// [`MANAGE_ROLES_REQUIREMENT`].
pub struct RoleCatalog {
    store: Arc<dyn AccessStore>,
}

impl RoleCatalog {
    /// Create a role catalog over the given store.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// List all roles with their permissions resolved.
    pub async fn list(&self, identity: &Identity) -> AdminResult<Vec<RoleDetail>> {
        require(identity, &MANAGE_ROLES_REQUIREMENT)?;

        let mut details = Vec::new();
        for role in self.store.list_roles().await? {
            let permissions = self.store.permissions_of_role(role.id).await?;
            details.push(RoleDetail { role, permissions });
        }
        Ok(details)
    }

    /// Fetch one role by ID with its permissions resolved.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AdminResult<RoleDetail> {
        require(identity, &MANAGE_ROLES_REQUIREMENT)?;

        let role = self.store.role_by_id(id).await?;
        let permissions = self.store.permissions_of_role(role.id).await?;
        Ok(RoleDetail { role, permissions })
    }

    /// Create a role, optionally attaching permissions by ID.
    ///
    /// Every permission ID is resolved before the role is written, so
    /// an unknown ID fails the whole operation without committing
    /// anything.
    ///
    /// # Errors
    ///
    /// - [`AdminError::MissingField`] if the name is empty
    /// - [`AdminError::Conflict`] on a duplicate name
    /// - [`AdminError::NotFound`] if any permission ID is unknown
    pub async fn create(&self, identity: &Identity, request: CreateRole) -> AdminResult<RoleDetail> {
        require(identity, &MANAGE_ROLES_REQUIREMENT)?;
        if request.name.is_empty() {
            return Err(AdminError::MissingField { field: "name" });
        }
        self.check_permissions_exist(&request.permission_ids).await?;

        let role = self
            .store
            .create_role(Role::new(request.name).with_description(request.description))
            .await?;

        if !request.permission_ids.is_empty() {
            self.store
                .set_role_permissions(role.id, &request.permission_ids)
                .await?;
        }

        let permissions = self.store.permissions_of_role(role.id).await?;
        Ok(RoleDetail { role, permissions })
    }

    /// Update a role. A `permission_ids` value replaces the role's
    /// whole permission set. As with [`RoleCatalog::create`], all
    /// inputs are validated before the first write, so a failed update
    /// leaves the role untouched.
    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        request: UpdateRole,
    ) -> AdminResult<RoleDetail> {
        require(identity, &MANAGE_ROLES_REQUIREMENT)?;

        let mut role = self.store.role_by_id(id).await?;
        if let Some(name) = request.name {
            if name.is_empty() {
                return Err(AdminError::MissingField { field: "name" });
            }
            role.name = name;
        }
        if let Some(description) = request.description {
            role.description = description;
        }
        if let Some(permission_ids) = &request.permission_ids {
            self.check_permissions_exist(permission_ids).await?;
        }

        let role = self.store.update_role(role).await?;
        if let Some(permission_ids) = request.permission_ids {
            self.store.set_role_permissions(role.id, &permission_ids).await?;
        }

        let permissions = self.store.permissions_of_role(role.id).await?;
        Ok(RoleDetail { role, permissions })
    }

    async fn check_permissions_exist(&self, permission_ids: &[Uuid]) -> AdminResult<()> {
        for permission_id in permission_ids {
            self.store.permission_by_id(*permission_id).await?;
        }
        Ok(())
    }

    /// Delete a role, cascading its removal from every user.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> AdminResult<()> {
        require(identity, &MANAGE_ROLES_REQUIREMENT)?;
        self.store.delete_role(id).await?;
        info!(%id, "Role deleted");
        Ok(())
    }
}
