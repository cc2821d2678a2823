//! # Warden RBAC (Role-Based Access Control)
//!
//! This crate provides the authorization decision engine for the
//! Warden platform: a pure allow/deny function over an authenticated
//! identity and a protected operation's declared permission
//! requirements.
//!
//! ## Overview
//!
//! The warden-rbac crate handles:
//! - **Identities**: The resolved, authenticated actor making a request
//! - **Permission Sets**: Named capabilities held through roles
//! - **Requirements**: Statically declared per-operation permissions
//! - **The Engine**: `authorize(identity, requirement) -> bool`
//!
//! ## Decision algorithm
//!
//! ```text
//! 1. anonymous              -> deny
//! 2. superuser              -> allow
//! 3. empty requirement      -> allow (authenticated-only operation)
//! 4. effective ∩ required   -> allow iff non-empty (ANY-of semantics)
//! ```
//!
//! The effective permission set of an identity is the union of the
//! permissions of every role granted to it. A requirement listing
//! several permissions is satisfied by holding at least one of them;
//! this is a deliberate design choice, not ALL-of.
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use warden_rbac::{authorize, Identity, Requirement, Subject};
//!
//! // Protected operations declare their requirements statically.
//! static VIEW_DOCS: Requirement = Requirement::any(&["view_own_documents"]);
//!
//! let identity = Identity::Authenticated(
//!     Subject::new(Uuid::now_v7(), "user@example.com")
//!         .with_grant("Пользователь", ["view_own_documents"]),
//! );
//!
//! assert!(authorize(&identity, &VIEW_DOCS));
//! assert!(!authorize(&Identity::Anonymous, &VIEW_DOCS));
//! ```
//!
//! ## Failure semantics
//!
//! The engine never errors and has no side effects: it always resolves
//! to a boolean for a given (identity, requirement) snapshot. The
//! calling layer turns `false` into a generic "forbidden" response and
//! must not leak which specific permission was missing.

pub mod engine;
pub mod identity;
pub mod permissions;
pub mod requirements;

// Re-export main types for convenience
pub use engine::authorize;
pub use identity::{Identity, RoleGrant, Subject};
pub use permissions::PermissionSet;
pub use requirements::{Requirement, ASSIGN_ROLES, MANAGE_PERMISSIONS, MANAGE_ROLES};
