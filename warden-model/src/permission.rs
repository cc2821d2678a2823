//! Permission entity
//!
//! A permission is an atomic, named capability. The name is the stable
//! key referenced by protected operations and by roles; it never
//! changes once created.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named capability (e.g. `"view_own_documents"`).
///
/// Permission names are unique across the catalog. Handler code refers
/// to permissions by name only; the description is free text for
/// administrators.
///
/// # Examples
///
/// ```
/// use warden_model::Permission;
///
/// let perm = Permission::new("assign_roles", "Allows assigning roles to users");
/// assert_eq!(perm.name, "assign_roles");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    /// Unique permission ID
    pub id: Uuid,

    /// Unique code name, the stable key (e.g. `"manage_roles"`)
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Permission {
    /// Creates a new permission definition.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique code name
    /// * `description` - Free-text description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_creation() {
        let perm = Permission::new("view_own_documents", "View own documents");
        assert_eq!(perm.name, "view_own_documents");
        assert_eq!(perm.description, "View own documents");
    }
}
