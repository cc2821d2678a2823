//! # Warden Administration
//!
//! Authorization-guarded management services for the Warden platform:
//! role assignment plus the role and permission catalogs.
//!
//! ## Overview
//!
//! The warden-admin crate handles:
//! - **Role assignment**: `assign` / `unassign` of a role to a user,
//!   guarded by the `assign_roles` permission
//! - **Role catalog**: CRUD guarded by `manage_roles`
//! - **Permission catalog**: CRUD guarded by `manage_permissions`
//!
//! The RBAC system protects its own administration surface using
//! itself: every service method takes the caller's [`Identity`] as an
//! explicit first parameter and runs it through the engine against the
//! operation's statically declared [`Requirement`] before doing
//! anything else.
//!
//! [`Identity`]: warden_rbac::Identity
//! [`Requirement`]: warden_rbac::Requirement
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use warden_admin::{AssignmentRequest, RoleAssignmentService};
//! use warden_rbac::Identity;
//! use warden_store::MemoryStore;
//!
//! # async fn demo(admin: Identity, user_id: Uuid, role_id: Uuid) {
//! let service = RoleAssignmentService::new(Arc::new(MemoryStore::new()));
//! let confirmation = service
//!     .assign(&admin, AssignmentRequest::new(user_id, role_id))
//!     .await
//!     .unwrap();
//! println!("{}", confirmation.message);
//! # }
//! ```
//!
//! ## Error surface
//!
//! An anonymous caller gets `Unauthenticated` (401); an authenticated
//! caller lacking the required permission gets `Forbidden` (403) with
//! one fixed message that never names the missing permission. Request
//! validation (400) runs before any lookup; missing referents are
//! `NotFound` (404); duplicate unique names are `Conflict` (409).

pub mod assignment;
pub mod catalog;
pub mod error;
pub mod guard;

// Re-export main types
pub use assignment::{AssignmentConfirmation, AssignmentRequest, RoleAssignmentService};
pub use catalog::{
    CreatePermission, CreateRole, PermissionCatalog, RoleCatalog, RoleDetail, UpdatePermission,
    UpdateRole,
};
pub use error::{AdminError, AdminResult};
pub use guard::require;
