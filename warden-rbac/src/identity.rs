//! Identity snapshot
//!
//! This module defines the resolved, authenticated actor that the
//! engine decides over. An identity is an explicit parameter threaded
//! through every call into the engine and the guarded services; there
//! is no ambient "current user" state anywhere in the platform.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permissions::PermissionSet;

/// A role granted to an identity, with the role's permissions resolved
/// at snapshot time.
///
/// The engine never reaches back into storage: the resolver captures
/// each granted role's permission names when it builds the identity,
/// so a decision is a pure function of the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGrant {
    /// Role name (e.g. `"Администратор"`)
    pub role: String,

    /// The role's permission names
    pub permissions: PermissionSet,
}

/// The authenticated actor behind an identity.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::Subject;
///
/// let subject = Subject::new(Uuid::now_v7(), "admin@example.com")
///     .superuser();
/// assert!(subject.is_superuser);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// User ID
    pub user_id: Uuid,

    /// User email
    pub email: String,

    /// Whether this subject bypasses all permission checks
    #[serde(default)]
    pub is_superuser: bool,

    /// Roles granted to this subject, permissions resolved
    #[serde(default)]
    pub grants: Vec<RoleGrant>,
}

impl Subject {
    /// Creates a new subject with no role grants.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user ID
    /// * `email` - The user email
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            is_superuser: false,
            grants: Vec::new(),
        }
    }

    /// Mark this subject as a superuser.
    pub fn superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }

    /// Add a role grant with the given permission names.
    ///
    /// # Arguments
    ///
    /// * `role` - The role name
    /// * `permissions` - The role's permission names
    pub fn with_grant<I, S>(mut self, role: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grants.push(RoleGrant {
            role: role.into(),
            permissions: PermissionSet::from_names(permissions),
        });
        self
    }

    /// Effective permission set: the union of the permissions of every
    /// granted role.
    pub fn effective_permissions(&self) -> PermissionSet {
        let mut effective = PermissionSet::new();
        for grant in &self.grants {
            effective.merge(&grant.permissions);
        }
        effective
    }
}

/// The resolved identity of a request.
///
/// `Anonymous` covers both "no credentials presented" and "credentials
/// did not resolve to an account"; the engine treats the two the same
/// way and denies.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::{Identity, Subject};
///
/// let identity = Identity::Authenticated(Subject::new(Uuid::now_v7(), "u@example.com"));
/// assert!(identity.is_authenticated());
/// assert!(!Identity::Anonymous.is_authenticated());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Identity {
    /// No authenticated actor
    Anonymous,

    /// A resolved, authenticated actor
    Authenticated(Subject),
}

impl Identity {
    /// Check whether this identity is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }

    /// Check whether this identity is a superuser.
    ///
    /// Anonymous identities are never superusers.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Identity::Authenticated(subject) if subject.is_superuser)
    }

    /// Get the authenticated subject, if any.
    pub fn subject(&self) -> Option<&Subject> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(subject) => Some(subject),
        }
    }

    /// Get the authenticated user ID, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        self.subject().map(|subject| subject.user_id)
    }

    /// Effective permission set of this identity.
    ///
    /// Union over all granted roles; empty for anonymous identities.
    /// Exposed for diagnostics as well as for the engine itself.
    pub fn effective_permissions(&self) -> PermissionSet {
        match self {
            Identity::Anonymous => PermissionSet::new(),
            Identity::Authenticated(subject) => subject.effective_permissions(),
        }
    }
}
