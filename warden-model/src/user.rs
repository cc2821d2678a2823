//! User account entity
//!
//! This module defines the user account model. Users are identified by
//! a unique email address and carry the activity flags consulted at
//! identity resolution time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account.
///
/// The email address is the unique, stable key for the account. The
/// password hash is an opaque string produced by the external
/// credential collaborator; this crate never interprets it.
///
/// Role assignments are not stored on the user: the User↔Role join is
/// owned by the store and mutated only through the role assignment
/// service.
///
/// # Examples
///
/// ```
/// use warden_model::User;
///
/// let mut user = User::new("user@example.com", "<opaque-hash>");
/// assert!(user.is_active);
///
/// user.soft_delete();
/// assert!(user.is_deleted);
/// assert!(!user.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,

    /// Email address (unique key)
    pub email: String,

    /// Opaque credential hash, owned by the credential collaborator
    pub password_hash: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Patronymic (optional middle name, empty when unused)
    #[serde(default)]
    pub patronymic: String,

    /// Whether the account can authenticate
    pub is_active: bool,

    /// Soft-deletion flag; the record is retained after self-deletion
    pub is_deleted: bool,

    /// Whether this account bypasses all permission checks
    #[serde(default)]
    pub is_superuser: bool,

    /// When the account was registered
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Creates a new active user account.
    ///
    /// The account is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status, not deleted, not superuser
    /// - Current timestamp for date_joined
    ///
    /// # Arguments
    ///
    /// * `email` - The unique email address
    /// * `password_hash` - Opaque hash from the credential collaborator
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_model::User;
    ///
    /// let user = User::new("user@example.com", "<opaque-hash>");
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: String::new(),
            last_name: String::new(),
            patronymic: String::new(),
            is_active: true,
            is_deleted: false,
            is_superuser: false,
            date_joined: Utc::now(),
        }
    }

    /// Set the given and family names.
    ///
    /// # Arguments
    ///
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Set the patronymic.
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = patronymic.into();
        self
    }

    /// Mark this account as a superuser.
    ///
    /// Superusers bypass all permission checks unconditionally.
    pub fn superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }

    /// Full display name in "last first patronymic" order.
    ///
    /// Empty components are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_model::User;
    ///
    /// let user = User::new("u@example.com", "h").with_name("Ivan", "Petrov");
    /// assert_eq!(user.full_name(), "Petrov Ivan");
    /// ```
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.patronymic]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Soft-delete this account.
    ///
    /// Sets `is_deleted` and clears `is_active`. The record is retained;
    /// identity resolution rejects the account from this point on.
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.is_active = false;
    }

    /// Whether the account may authenticate at all.
    ///
    /// # Returns
    ///
    /// `true` only for active, non-deleted accounts
    pub fn can_authenticate(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("user@example.com", "<opaque-hash>");
        assert_eq!(user.email, "user@example.com");
        assert!(user.is_active);
        assert!(!user.is_deleted);
        assert!(!user.is_superuser);
        assert!(user.can_authenticate());
    }

    #[test]
    fn test_user_builders() {
        let user = User::new("u@example.com", "h")
            .with_name("Ivan", "Petrov")
            .with_patronymic("Sergeevich")
            .superuser();

        assert_eq!(user.first_name, "Ivan");
        assert_eq!(user.last_name, "Petrov");
        assert_eq!(user.patronymic, "Sergeevich");
        assert!(user.is_superuser);
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let user = User::new("u@example.com", "h").with_name("Ivan", "Petrov");
        assert_eq!(user.full_name(), "Petrov Ivan");

        let anonymous_parts = User::new("u@example.com", "h");
        assert_eq!(anonymous_parts.full_name(), "");
    }

    #[test]
    fn test_soft_delete_flags() {
        let mut user = User::new("u@example.com", "h");
        user.soft_delete();

        assert!(user.is_deleted);
        assert!(!user.is_active);
        assert!(!user.can_authenticate());
    }
}
