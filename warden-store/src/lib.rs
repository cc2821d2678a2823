//! # Warden Store
//!
//! Persistence seam for the Warden platform: the `AccessStore` trait
//! that the services depend on, plus an in-memory implementation.
//!
//! ## Overview
//!
//! The warden-store crate handles:
//! - **AccessStore**: CRUD for users, roles, and permissions, plus the
//!   two many-to-many joins (User↔Role, Role↔Permission)
//! - **MemoryStore**: `RwLock`-guarded implementation suitable for
//!   single-process applications and testing
//! - **Bootstrap**: idempotent seeding of the standard catalog
//!
//! ## Join relations
//!
//! Associations are explicit `(id, id)` pair relations with pair
//! uniqueness, never fields on the entities. `assign_role` and
//! `unassign_role` have set semantics: repeating either call is a
//! no-op success.
//!
//! ## Consistency
//!
//! Every mutating call on `MemoryStore` takes the single write lock for
//! the duration of the call, so concurrent assign/unassign on the same
//! pair serialize rather than race. A database-backed implementation
//! must wrap each call in a transaction with at least read-committed
//! isolation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warden_model::{Role, User};
//! use warden_store::{AccessStore, MemoryStore};
//!
//! # async fn demo() -> Result<(), warden_store::StoreError> {
//! let store = MemoryStore::new();
//! let user = store.create_user(User::new("u@example.com", "<hash>")).await?;
//! let role = store.create_role(Role::new("Пользователь")).await?;
//!
//! store.assign_role(user.id, role.id).await?;
//! store.assign_role(user.id, role.id).await?; // no-op
//! assert_eq!(store.roles_of_user(user.id).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod store;

// Re-export main types
pub use bootstrap::bootstrap;
pub use error::{StoreError, StoreResult};
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use store::AccessStore;
