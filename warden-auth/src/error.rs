//! Error types for authentication and account operations
//!
//! This module defines all error types that can occur during identity
//! resolution, login, and account management.

use thiserror::Error;

use warden_store::StoreError;

/// Authentication error types.
///
/// These errors cover identity resolution and account lifecycle
/// failures. Unknown email and wrong password both surface as
/// `InvalidCredentials` so account existence is not revealed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials did not match any usable account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account has been soft-deleted
    #[error("This account has been deleted")]
    AccountDeleted,

    /// Account is deactivated
    #[error("This account is disabled")]
    AccountDisabled,

    /// A required field was missing from a request
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Password and confirmation did not match
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Referenced user does not exist
    #[error("User not found")]
    NotFound,

    /// Unique email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Credential collaborator failure
    #[error("Credential error: {0}")]
    Credential(String),

    /// Token issuance collaborator failure
    #[error("Token issuance error: {0}")]
    TokenIssuance(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Check if this error should be logged at error level.
    ///
    /// Expected failures (bad credentials, deleted accounts) are not
    /// server errors.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AuthError::Credential(_) | AuthError::TokenIssuance(_) | AuthError::Internal(_)
        )
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials | AuthError::AccountDeleted => 401,
            AuthError::AccountDisabled => 403,
            AuthError::MissingField(_) | AuthError::PasswordMismatch => 400,
            AuthError::NotFound => 404,
            AuthError::EmailTaken => 409,
            AuthError::Credential(_) | AuthError::TokenIssuance(_) | AuthError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountDeleted => "ACCOUNT_DELETED",
            AuthError::AccountDisabled => "ACCOUNT_DISABLED",
            AuthError::MissingField(_) => "MISSING_FIELD",
            AuthError::PasswordMismatch => "PASSWORD_MISMATCH",
            AuthError::NotFound => "NOT_FOUND",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::Credential(_) => "CREDENTIAL_ERROR",
            AuthError::TokenIssuance(_) => "TOKEN_ISSUANCE_ERROR",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AuthError::NotFound,
            StoreError::DuplicateName { .. } => AuthError::EmailTaken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::AccountDeleted.status_code(), 401);
        assert_eq!(AuthError::PasswordMismatch.status_code(), 400);
        assert_eq!(AuthError::EmailTaken.status_code(), 409);
        assert_eq!(AuthError::NotFound.status_code(), 404);
    }

    #[test]
    fn test_server_error_classification() {
        assert!(!AuthError::InvalidCredentials.is_server_error());
        assert!(AuthError::Internal("boom".into()).is_server_error());
    }
}
