//! Error types for administration operations

use thiserror::Error;

use warden_store::StoreError;

/// Administration error types.
///
/// The `Forbidden` message is fixed and generic: it must never
/// enumerate which permission the caller was missing.
#[derive(Debug, Error)]
pub enum AdminError {
    /// No authenticated identity
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated but lacking the required permission
    #[error("You do not have permission to perform this action")]
    Forbidden,

    /// A required request field was missing
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name
        field: &'static str,
    },

    /// Referenced entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind ("user", "role", "permission")
        entity: &'static str,
    },

    /// Duplicate unique name on create or update
    #[error("{entity} with name '{name}' already exists")]
    Conflict {
        /// Entity kind
        entity: &'static str,
        /// The colliding name
        name: String,
    },
}

/// Result type for administration operations.
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AdminError::Unauthenticated => 401,
            AdminError::Forbidden => 403,
            AdminError::MissingField { .. } => 400,
            AdminError::NotFound { .. } => 404,
            AdminError::Conflict { .. } => 409,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Unauthenticated => "UNAUTHENTICATED",
            AdminError::Forbidden => "FORBIDDEN",
            AdminError::MissingField { .. } => "MISSING_FIELD",
            AdminError::NotFound { .. } => "NOT_FOUND",
            AdminError::Conflict { .. } => "CONFLICT",
        }
    }
}

impl From<StoreError> for AdminError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity } => AdminError::NotFound { entity },
            StoreError::DuplicateName { entity, name } => AdminError::Conflict { entity, name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AdminError::Unauthenticated.status_code(), 401);
        assert_eq!(AdminError::Forbidden.status_code(), 403);
        assert_eq!(AdminError::MissingField { field: "role_id" }.status_code(), 400);
        assert_eq!(AdminError::NotFound { entity: "role" }.status_code(), 404);
    }

    #[test]
    fn test_forbidden_message_is_generic() {
        let message = AdminError::Forbidden.to_string();
        assert_eq!(message, "You do not have permission to perform this action");
    }
}
