//! # Permission sets
//!
//! A permission is an atomic, named capability string. This module
//! provides the set type used for effective permissions and for
//! intersection checks against declared requirements.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of permission names.
///
/// Set semantics throughout: unordered, no duplicates. Adding a name
/// twice is a no-op, so a role granted twice contributes its
/// permissions once.
///
/// # Example
///
/// ```
/// use warden_rbac::PermissionSet;
///
/// let mut set = PermissionSet::new();
/// set.add("view_own_documents");
/// set.add("view_own_documents"); // duplicate, no-op
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains("view_own_documents"));
/// assert!(set.contains_any(["manage_roles", "view_own_documents"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// The permission names in this set.
    permissions: HashSet<String>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Create from a list of permission names.
    ///
    /// # Arguments
    ///
    /// * `names` - Permission names (e.g. `["manage_roles"]`)
    ///
    /// # Example
    ///
    /// ```
    /// use warden_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_names(["manage_roles", "assign_roles"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a permission name to the set.
    pub fn add(&mut self, name: impl Into<String>) {
        self.permissions.insert(name.into());
    }

    /// Remove a permission name from the set.
    ///
    /// # Returns
    ///
    /// `true` if the name was present, `false` otherwise
    pub fn remove(&mut self, name: &str) -> bool {
        self.permissions.remove(name)
    }

    /// Check if the set contains a permission name.
    pub fn contains(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    /// Check if the set contains at least one of the given names.
    ///
    /// This is the ANY-of check the engine performs between an
    /// identity's effective permissions and a declared requirement.
    ///
    /// # Arguments
    ///
    /// * `names` - The names to check against
    ///
    /// # Returns
    ///
    /// `true` if the intersection is non-empty
    pub fn contains_any<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .any(|name| self.permissions.contains(name.as_ref()))
    }

    /// Merge another permission set into this one (union).
    ///
    /// # Arguments
    ///
    /// * `other` - The permission set to merge
    pub fn merge(&mut self, other: &PermissionSet) {
        for perm in &other.permissions {
            self.permissions.insert(perm.clone());
        }
    }

    /// Iterate over the permission names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}

impl<S: Into<String>> Extend<S> for PermissionSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for name in iter {
            self.permissions.insert(name.into());
        }
    }
}
