//! # Warden Authentication
//!
//! This crate provides identity resolution and the account lifecycle
//! for the Warden platform.
//!
//! ## Overview
//!
//! The warden-auth crate handles:
//! - **Identity resolution**: turning an authenticated user reference
//!   into an [`Identity`](warden_rbac::Identity) snapshot with resolved
//!   role grants
//! - **Accounts**: registration, login, profile management, and soft
//!   deletion
//! - **Collaborator seams**: password hashing and token issuance are
//!   external services behind traits; this crate never interprets a
//!   hash or a token
//!
//! ## Soft-deleted accounts
//!
//! A soft-deleted or deactivated account is rejected at EVERY identity
//! resolution point, not only at login. A stale session referencing a
//! deleted user therefore stops resolving immediately.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use warden_auth::{AccountService, IdentityResolver, RegistrationRequest};
//! use warden_store::MemoryStore;
//!
//! # use warden_auth::{AuthResult, PasswordHasher, TokenIssuer};
//! # async fn demo(hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenIssuer>) -> AuthResult<()> {
//! let store = Arc::new(MemoryStore::new());
//! let accounts = AccountService::new(store.clone(), hasher, tokens);
//!
//! let profile = accounts
//!     .register(RegistrationRequest::new("user@example.com", "secret", "secret"))
//!     .await?;
//! let tokens = accounts.login("user@example.com", "secret").await?;
//!
//! let resolver = IdentityResolver::new(store);
//! let identity = resolver.resolve_email(&profile.email).await?;
//! assert!(identity.is_authenticated());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod credentials;
pub mod error;
pub mod resolver;

// Re-export main types
pub use account::{AccountService, Profile, ProfileUpdate, RegistrationRequest};
pub use credentials::{PasswordHasher, TokenIssuer, TokenPair};
pub use error::{AuthError, AuthResult};
pub use resolver::IdentityResolver;
