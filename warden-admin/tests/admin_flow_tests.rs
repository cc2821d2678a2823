//! End-to-end tests for the administration surface.
//!
//! These tests run the full path a request pipeline would: accounts are
//! registered through warden-auth, identities are resolved from the
//! store, and the guarded services are called with those identities.
//!
//! Covered flows:
//! 1. Bootstrap catalog → assign «Пользователь» → document access
//! 2. Self-service escalation attempt by a bare user
//! 3. Escalation succeeds once `assign_roles` is actually held
//! 4. Soft-deleted admin loses the administration surface
//! 5. Role catalog denies outsiders and serves `manage_roles` holders

use std::sync::Arc;

use async_trait::async_trait;
use warden_admin::{AdminError, AssignmentRequest, RoleAssignmentService, RoleCatalog};
use warden_auth::{
    AccountService, AuthResult, IdentityResolver, PasswordHasher, RegistrationRequest, TokenIssuer,
    TokenPair,
};
use warden_model::User;
use warden_rbac::{authorize, Identity, Requirement};
use warden_store::{bootstrap, AccessStore, MemoryStore};

/// Reversible stand-in for the external password hasher.
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

/// Stand-in for the external token issuer.
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

/// Test fixture wiring the store, accounts, resolver, and services.
struct TestFixture {
    store: Arc<MemoryStore>,
    accounts: AccountService,
    resolver: IdentityResolver,
    assignments: RoleAssignmentService,
}

impl TestFixture {
    /// Create a fixture with the standard catalog bootstrapped.
    async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        bootstrap(store.as_ref()).await.unwrap();

        Self {
            accounts: AccountService::new(store.clone(), Arc::new(PlainHasher), Arc::new(StaticIssuer)),
            resolver: IdentityResolver::new(store.clone()),
            assignments: RoleAssignmentService::new(store.clone()),
            store,
        }
    }

    /// Register an account and return its user ID.
    async fn register(&self, email: &str) -> uuid::Uuid {
        self.accounts
            .register(RegistrationRequest::new(email, "secret", "secret"))
            .await
            .unwrap()
            .id
    }

    /// Resolve a user ID into an identity.
    async fn identity(&self, user_id: uuid::Uuid) -> Identity {
        self.resolver.resolve(user_id).await.unwrap()
    }

    /// Create a superuser account directly in the store.
    async fn superuser(&self) -> Identity {
        let root = self
            .store
            .create_user(User::new("root@example.com", "plain:root").superuser())
            .await
            .unwrap();
        self.identity(root.id).await
    }
}

static VIEW_DOCUMENTS: Requirement = Requirement::any(&["view_own_documents"]);
static VIEW_REPORTS: Requirement = Requirement::any(&["view_financial_reports"]);

#[tokio::test]
async fn assigned_role_grants_document_access() {
    let fixture = TestFixture::new().await;

    let user_id = fixture.register("user@example.com").await;
    let role = fixture.store.role_by_name("Пользователь").await.unwrap();

    // Before assignment the document requirement is unmet.
    let before = fixture.identity(user_id).await;
    assert!(!authorize(&before, &VIEW_DOCUMENTS));

    let root = fixture.superuser().await;
    fixture
        .assignments
        .assign(&root, AssignmentRequest::new(user_id, role.id))
        .await
        .unwrap();

    // A fresh snapshot reflects the assignment.
    let after = fixture.identity(user_id).await;
    assert!(authorize(&after, &VIEW_DOCUMENTS));
    assert!(!authorize(&after, &VIEW_REPORTS));
}

#[tokio::test]
async fn bare_user_cannot_self_assign() {
    let fixture = TestFixture::new().await;

    let user_id = fixture.register("user@example.com").await;
    let admin_role = fixture.store.role_by_name("Администратор").await.unwrap();

    // A bare authenticated user tries to grant itself the admin role.
    let caller = fixture.identity(user_id).await;
    let err = fixture
        .assignments
        .assign(&caller, AssignmentRequest::new(user_id, admin_role.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Forbidden));

    // Nothing changed.
    assert!(fixture.store.roles_of_user(user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn holder_of_assign_roles_can_assign() {
    let fixture = TestFixture::new().await;

    let operator_id = fixture.register("operator@example.com").await;
    let target_id = fixture.register("target@example.com").await;
    let admin_role = fixture.store.role_by_name("Администратор").await.unwrap();
    let user_role = fixture.store.role_by_name("Пользователь").await.unwrap();

    // Grant the operator the admin role (which carries assign_roles)
    // via a superuser, then act as the operator.
    let root = fixture.superuser().await;
    fixture
        .assignments
        .assign(&root, AssignmentRequest::new(operator_id, admin_role.id))
        .await
        .unwrap();

    let operator = fixture.identity(operator_id).await;
    let confirmation = fixture
        .assignments
        .assign(&operator, AssignmentRequest::new(target_id, user_role.id))
        .await
        .unwrap();

    assert_eq!(confirmation.role_name, "Пользователь");
    assert_eq!(confirmation.user_email, "target@example.com");
}

#[tokio::test]
async fn soft_deleted_admin_stops_resolving() {
    let fixture = TestFixture::new().await;

    let operator_id = fixture.register("operator@example.com").await;
    let admin_role = fixture.store.role_by_name("Администратор").await.unwrap();

    let root = fixture.superuser().await;
    fixture
        .assignments
        .assign(&root, AssignmentRequest::new(operator_id, admin_role.id))
        .await
        .unwrap();

    // The account is deleted out from under any session it still has.
    fixture.accounts.deactivate(operator_id).await.unwrap();
    assert!(fixture.resolver.resolve(operator_id).await.is_err());
}

#[tokio::test]
async fn role_catalog_guards_and_serves_admins() {
    let fixture = TestFixture::new().await;

    let user_id = fixture.register("user@example.com").await;
    let caller = fixture.identity(user_id).await;

    let catalog = RoleCatalog::new(fixture.store.clone());
    let err = catalog.list(&caller).await.unwrap_err();
    assert!(matches!(err, AdminError::Forbidden));

    let root = fixture.superuser().await;
    let roles = catalog.list(&root).await.unwrap();
    assert_eq!(roles.len(), 2);
}
