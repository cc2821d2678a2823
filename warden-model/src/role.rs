//! Role entity
//!
//! A role is a named bundle of permissions assignable to users. The
//! Role↔Permission join lives in the store; the entity carries only
//! identity and description.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, assignable bundle of permissions.
///
/// Role names are unique. A user's effective permission set is the
/// union of the permissions of all roles assigned to that user.
///
/// # Examples
///
/// ```
/// use warden_model::Role;
///
/// let role = Role::new("Администратор").with_description("Full access");
/// assert_eq!(role.name, "Администратор");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Unique role ID
    pub id: Uuid,

    /// Unique role name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Role {
    /// Creates a new role with an empty description.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique role name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_creation() {
        let role = Role::new("Пользователь");
        assert_eq!(role.name, "Пользователь");
        assert!(role.description.is_empty());

        let described = Role::new("Администратор").with_description("Full access");
        assert_eq!(described.description, "Full access");
    }

    #[test]
    fn test_role_ids_are_unique() {
        let a = Role::new("a");
        let b = Role::new("a");
        assert_ne!(a.id, b.id);
    }
}
