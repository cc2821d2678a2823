//! Error types for store operations

use thiserror::Error;

/// Store error types.
///
/// These are the relational failures the services translate into their
/// own error kinds: missing referents become 404-equivalents, unique
/// name collisions become 409-equivalents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind ("user", "role", "permission")
        entity: &'static str,
    },

    /// Unique name constraint violated on create or update
    #[error("{entity} with name '{name}' already exists")]
    DuplicateName {
        /// Entity kind ("user", "role", "permission")
        entity: &'static str,
        /// The colliding name
        name: String,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Shorthand for a missing-entity error.
    pub fn not_found(entity: &'static str) -> Self {
        StoreError::NotFound { entity }
    }

    /// Shorthand for a unique-name violation.
    pub fn duplicate(entity: &'static str, name: impl Into<String>) -> Self {
        StoreError::DuplicateName {
            entity,
            name: name.into(),
        }
    }
}
