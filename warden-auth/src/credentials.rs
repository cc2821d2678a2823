//! External collaborator seams
//!
//! Password hashing and token issuance are already-solved external
//! services. This module defines the traits the account service calls
//! into; the hash format and the token wire format are opaque here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use warden_model::User;

use crate::error::AuthResult;

/// Password hashing collaborator.
///
/// The produced hash is stored as an opaque string on the user record.
/// This crate never compares hashes itself.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    async fn hash(&self, password: &str) -> AuthResult<String>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Returns
    ///
    /// `true` if the password matches
    async fn verify(&self, password: &str, password_hash: &str) -> AuthResult<bool>;
}

/// An issued credential pair.
///
/// Both tokens are opaque bearer strings; their format and transport
/// are owned by the issuing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access: String,

    /// Long-lived refresh token
    pub refresh: String,
}

/// Token issuance collaborator.
///
/// Turns a validated account into a bearer credential pair.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token pair for a validated user.
    async fn issue(&self, user: &User) -> AuthResult<TokenPair>;
}
