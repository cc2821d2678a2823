//! Initial catalog seeding
//!
//! Seeds the standard permission and role catalog into a store so a
//! fresh deployment starts with a usable RBAC setup. Idempotent: every
//! entry is get-or-create by name, so running it against an already
//! seeded store changes nothing.

use tracing::info;

use warden_model::{Permission, Role};

use crate::error::{StoreError, StoreResult};
use crate::store::AccessStore;

/// The standard catalog: (permission name, description).
const CATALOG: &[(&str, &str)] = &[
    ("view_own_documents", "Allows a user to view their own documents."),
    ("view_financial_reports", "Allows viewing financial reports."),
    ("manage_permissions", "Allows managing the permission catalog."),
    ("manage_roles", "Allows managing the role catalog."),
    ("assign_roles", "Allows assigning roles to users."),
];

async fn permission_get_or_create(
    store: &dyn AccessStore,
    name: &str,
    description: &str,
) -> StoreResult<Permission> {
    match store.permission_by_name(name).await {
        Ok(existing) => Ok(existing),
        Err(StoreError::NotFound { .. }) => {
            store.create_permission(Permission::new(name, description)).await
        }
        Err(err) => Err(err),
    }
}

/// Seed the standard catalog into `store`.
///
/// Creates the five standard permissions plus two roles:
/// - «Администратор» holding every catalog permission
/// - «Пользователь» holding only `view_own_documents`
///
/// Existing entries (matched by name) are left untouched, including
/// their permission sets.
///
/// # Arguments
///
/// * `store` - The store to seed
pub async fn bootstrap(store: &dyn AccessStore) -> StoreResult<()> {
    let mut permission_ids = Vec::with_capacity(CATALOG.len());
    for (name, description) in CATALOG {
        let permission = permission_get_or_create(store, name, description).await?;
        permission_ids.push(permission.id);
    }

    match store.role_by_name("Администратор").await {
        Ok(_) => {}
        Err(StoreError::NotFound { .. }) => {
            let admin = store
                .create_role(Role::new("Администратор").with_description("Full access"))
                .await?;
            store.set_role_permissions(admin.id, &permission_ids).await?;
        }
        Err(err) => return Err(err),
    }

    match store.role_by_name("Пользователь").await {
        Ok(_) => {}
        Err(StoreError::NotFound { .. }) => {
            let user_role = store
                .create_role(Role::new("Пользователь").with_description("Regular user"))
                .await?;
            let view_own = store.permission_by_name("view_own_documents").await?;
            store.set_role_permissions(user_role.id, &[view_own.id]).await?;
        }
        Err(err) => return Err(err),
    }

    info!("Bootstrapped standard permission and role catalog");
    Ok(())
}
