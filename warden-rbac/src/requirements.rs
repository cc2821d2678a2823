//! # Requirement declarations
//!
//! The contract by which protected operations declare the permissions
//! they require. A declaration is static, read-only metadata consumed
//! by the engine at request time; it is never mutated at runtime.
//!
//! A `Requirement` is declarable as a `static` next to the operation
//! it protects, so every declaration is checked at compile time rather
//! than discovered at request time.

/// Permission name required to assign or unassign roles.
pub const ASSIGN_ROLES: &str = "assign_roles";

/// Permission name required to manage the permission catalog.
pub const MANAGE_PERMISSIONS: &str = "manage_permissions";

/// Permission name required to manage the role catalog.
pub const MANAGE_ROLES: &str = "manage_roles";

/// A protected operation's declared permission requirement.
///
/// The listed names form an unordered set with ANY-of semantics: an
/// identity holding at least one of them passes. An empty requirement
/// means "any authenticated identity".
///
/// The management surface of the RBAC system itself is declared with
/// [`MANAGE_PERMISSIONS`], [`MANAGE_ROLES`], and [`ASSIGN_ROLES`] — the
/// system protects its own administration using itself.
///
/// # Examples
///
/// ```
/// use warden_rbac::Requirement;
///
/// static MANAGE: Requirement = Requirement::any(&["manage_roles"]);
/// static AUTH_ONLY: Requirement = Requirement::authenticated();
///
/// assert!(!MANAGE.is_empty());
/// assert!(AUTH_ONLY.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    required: &'static [&'static str],
}

impl Requirement {
    /// Declare a requirement satisfied by ANY of the listed permissions.
    ///
    /// # Arguments
    ///
    /// * `required` - The acceptable permission names
    pub const fn any(required: &'static [&'static str]) -> Self {
        Self { required }
    }

    /// Declare an authenticated-only operation (empty requirement).
    pub const fn authenticated() -> Self {
        Self { required: &[] }
    }

    /// The declared permission names.
    ///
    /// Order and duplication are irrelevant; the engine treats the
    /// slice as a set.
    pub fn permissions(&self) -> &'static [&'static str] {
        self.required
    }

    /// Check whether this requirement is empty (authenticated-only).
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}
