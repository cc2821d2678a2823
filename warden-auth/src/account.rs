//! Account lifecycle
//!
//! Registration, login, profile management, and soft deletion. All
//! credential work is delegated to the external collaborators; this
//! module owns only the account rules.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use warden_model::User;
use warden_store::{AccessStore, StoreError};

use crate::credentials::{PasswordHasher, TokenIssuer, TokenPair};
use crate::error::{AuthError, AuthResult};

/// A registration request.
///
/// The password is entered twice and both entries must match before
/// any account is created.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    /// Email address (unique key)
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,

    /// Password confirmation
    pub password2: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Patronymic
    #[serde(default)]
    pub patronymic: String,
}

impl RegistrationRequest {
    /// Create a request with the name fields empty.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password2: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password2: password2.into(),
            first_name: String::new(),
            last_name: String::new(),
            patronymic: String::new(),
        }
    }

    /// Set the given and family names.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }
}

/// A user's public profile.
///
/// The email is read-only; profile updates can change only the name
/// fields. The credential hash is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// User ID
    pub id: Uuid,

    /// Email address (read-only)
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Patronymic
    pub patronymic: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            patronymic: user.patronymic.clone(),
        }
    }
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    /// New given name
    pub first_name: Option<String>,

    /// New family name
    pub last_name: Option<String>,

    /// New patronymic
    pub patronymic: Option<String>,
}

/// Account lifecycle service.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use warden_auth::{AccountService, RegistrationRequest};
/// use warden_store::MemoryStore;
///
/// # use warden_auth::{AuthResult, PasswordHasher, TokenIssuer};
/// # async fn demo(hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenIssuer>) -> AuthResult<()> {
/// let accounts = AccountService::new(Arc::new(MemoryStore::new()), hasher, tokens);
/// accounts
///     .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    store: Arc<dyn AccessStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountService {
    /// Create an account service over the given store and collaborators.
    pub fn new(
        store: Arc<dyn AccessStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// Open to anyone; no identity is required. The password is hashed
    /// by the collaborator before anything is stored.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingField`] if email or password is empty
    /// - [`AuthError::PasswordMismatch`] if the confirmation differs
    /// - [`AuthError::EmailTaken`] if the email is already registered
    pub async fn register(&self, request: RegistrationRequest) -> AuthResult<Profile> {
        if request.email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if request.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if request.password != request.password2 {
            return Err(AuthError::PasswordMismatch);
        }

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = User::new(request.email, password_hash)
            .with_name(request.first_name, request.last_name)
            .with_patronymic(request.patronymic);

        let user = self.store.create_user(user).await?;
        info!("Registered account '{}'", user.email);
        Ok(Profile::from(&user))
    }

    /// Log in with email and password.
    ///
    /// Unknown email and wrong password both yield
    /// [`AuthError::InvalidCredentials`]; account existence is not
    /// revealed. A soft-deleted account is rejected even when the
    /// credentials are valid.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<TokenPair> {
        let user = match self.store.user_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound { .. }) => return Err(AuthError::InvalidCredentials),
            Err(err) => return Err(err.into()),
        };

        if user.is_deleted {
            return Err(AuthError::AccountDeleted);
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled);
        }

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        info!("Issued tokens for '{}'", user.email);
        self.tokens.issue(&user).await
    }

    /// Fetch a user's profile.
    pub async fn profile(&self, user_id: Uuid) -> AuthResult<Profile> {
        let user = self.store.user_by_id(user_id).await?;
        Ok(Profile::from(&user))
    }

    /// Update a user's profile. The email cannot be changed.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> AuthResult<Profile> {
        let mut user = self.store.user_by_id(user_id).await?;

        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(patronymic) = update.patronymic {
            user.patronymic = patronymic;
        }

        let user = self.store.update_user(user).await?;
        Ok(Profile::from(&user))
    }

    /// Soft-delete an account.
    ///
    /// The record is retained with `is_deleted` set and `is_active`
    /// cleared; identity resolution rejects it from this point on.
    pub async fn deactivate(&self, user_id: Uuid) -> AuthResult<()> {
        let mut user = self.store.user_by_id(user_id).await?;
        user.soft_delete();
        self.store.update_user(user).await?;

        info!(%user_id, "Account soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use warden_store::MemoryStore;

    /// Reversible stand-in for the external hasher.
    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash(&self, password: &str) -> AuthResult<String> {
            Ok(format!("plain:{password}"))
        }

        async fn verify(&self, password: &str, password_hash: &str) -> AuthResult<bool> {
            Ok(password_hash == format!("plain:{password}"))
        }
    }

    struct StaticIssuer;

    #[async_trait]
    impl TokenIssuer for StaticIssuer {
        async fn issue(&self, user: &User) -> AuthResult<TokenPair> {
            Ok(TokenPair {
                access: format!("access-{}", user.id),
                refresh: format!("refresh-{}", user.id),
            })
        }
    }

    fn service() -> (Arc<MemoryStore>, AccountService) {
        let store = Arc::new(MemoryStore::new());
        let service =
            AccountService::new(store.clone(), Arc::new(PlainHasher), Arc::new(StaticIssuer));
        (store, service)
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (_, accounts) = service();

        let profile = accounts
            .register(
                RegistrationRequest::new("u@example.com", "secret", "secret")
                    .with_name("Ivan", "Petrov"),
            )
            .await
            .unwrap();
        assert_eq!(profile.email, "u@example.com");

        let tokens = accounts.login("u@example.com", "secret").await.unwrap();
        assert!(tokens.access.starts_with("access-"));
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext() {
        let (store, accounts) = service();
        accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
            .await
            .unwrap();

        let user = store.user_by_email("u@example.com").await.unwrap();
        assert_ne!(user.password_hash, "secret");
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let (_, accounts) = service();
        let err = accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "other"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict() {
        let (_, accounts) = service();
        accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
            .await
            .unwrap();

        let err = accounts
            .register(RegistrationRequest::new("u@example.com", "other", "other"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (_, accounts) = service();
        accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
            .await
            .unwrap();

        let err = accounts.login("u@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email_does_not_reveal() {
        let (_, accounts) = service();
        let err = accounts.login("nobody@example.com", "x").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_soft_deleted_rejected_with_valid_credentials() {
        let (store, accounts) = service();
        let profile = accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
            .await
            .unwrap();
        accounts.deactivate(profile.id).await.unwrap();

        let err = accounts.login("u@example.com", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::AccountDeleted));

        // Record retained, only flagged.
        let user = store.user_by_email("u@example.com").await.unwrap();
        assert!(user.is_deleted);
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_update_profile_leaves_email() {
        let (_, accounts) = service();
        let profile = accounts
            .register(RegistrationRequest::new("u@example.com", "secret", "secret"))
            .await
            .unwrap();

        let updated = accounts
            .update_profile(
                profile.id,
                ProfileUpdate {
                    first_name: Some("Ivan".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Ivan");
        assert_eq!(updated.email, "u@example.com");
    }
}
