//! Authorization guard
//!
//! Translates the engine's boolean decision into the error surface the
//! services use.

use warden_rbac::{authorize, Identity, Requirement};

use crate::error::{AdminError, AdminResult};

/// Require that `identity` satisfies `requirement`.
///
/// # Errors
///
/// - [`AdminError::Unauthenticated`] for anonymous identities
/// - [`AdminError::Forbidden`] when the engine denies; the error
///   message is fixed and does not name the missing permission
///
/// # Examples
///
/// ```
/// use warden_admin::require;
/// use warden_rbac::{Identity, Requirement};
///
/// static MANAGE: Requirement = Requirement::any(&["manage_roles"]);
/// assert!(require(&Identity::Anonymous, &MANAGE).is_err());
/// ```
pub fn require(identity: &Identity, requirement: &Requirement) -> AdminResult<()> {
    if !identity.is_authenticated() {
        return Err(AdminError::Unauthenticated);
    }
    if !authorize(identity, requirement) {
        return Err(AdminError::Forbidden);
    }
    Ok(())
}
