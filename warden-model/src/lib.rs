//! # Warden Domain Model
//!
//! This crate provides the core domain entities for the Warden access
//! control platform, shared by the engine, store, and service crates.
//!
//! ## Overview
//!
//! The warden-model crate defines:
//! - **User**: An account identified by email, with activity flags
//! - **Permission**: An atomic, named capability
//! - **Role**: A named bundle of permissions, assignable to users
//!
//! ## Associations
//!
//! User↔Role and Role↔Permission are many-to-many relations. The
//! entities themselves do NOT carry the association sets: the joins are
//! owned by the persistence layer (`warden-store`) as explicit
//! `(id, id)` pair relations with pair uniqueness. This keeps the
//! entities plain data and the relational invariants in one place.
//!
//! ## Usage
//!
//! ```rust
//! use warden_model::{Permission, Role, User};
//!
//! let user = User::new("user@example.com", "<opaque-hash>")
//!     .with_name("Ivan", "Petrov");
//! assert!(user.is_active);
//! assert!(!user.is_deleted);
//!
//! let role = Role::new("Пользователь").with_description("Regular user");
//! let perm = Permission::new("view_own_documents", "View own documents");
//! assert_eq!(perm.name, "view_own_documents");
//! ```
//!
//! ## Soft deletion
//!
//! Users are never hard-deleted. `User::soft_delete` flips the
//! `is_deleted` / `is_active` flags and the record is retained; every
//! identity-resolution point rejects soft-deleted accounts.

pub mod permission;
pub mod role;
pub mod user;

// Re-export main types for convenience
pub use permission::Permission;
pub use role::Role;
pub use user::User;
