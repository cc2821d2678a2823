//! # The authorization engine
//!
//! A pure decision function over (identity, requirement). Stateless,
//! side-effect free, and deterministic for a given snapshot: safe under
//! unbounded parallel invocation, no locking required.

use crate::identity::Identity;
use crate::requirements::Requirement;

/// Decide whether `identity` may perform an operation declaring
/// `requirement`.
///
/// The steps short-circuit in order:
///
/// 1. Anonymous identity → deny.
/// 2. Superuser → allow, unconditionally (even for permission names
///    that do not exist anywhere in the catalog).
/// 3. Empty requirement → allow any authenticated identity.
/// 4. Otherwise allow iff the identity's effective permission set
///    intersects the required set (ANY-of semantics).
///
/// The function never errors. The caller is responsible for mapping
/// `false` onto a generic "forbidden" response without revealing which
/// permission was missing.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden_rbac::{authorize, Identity, Requirement, Subject};
///
/// static REPORTS: Requirement = Requirement::any(&["view_financial_reports"]);
///
/// let user = Identity::Authenticated(
///     Subject::new(Uuid::now_v7(), "u@example.com")
///         .with_grant("Пользователь", ["view_own_documents"]),
/// );
/// assert!(!authorize(&user, &REPORTS));
///
/// let root = Identity::Authenticated(
///     Subject::new(Uuid::now_v7(), "root@example.com").superuser(),
/// );
/// assert!(authorize(&root, &REPORTS));
/// ```
pub fn authorize(identity: &Identity, requirement: &Requirement) -> bool {
    let subject = match identity.subject() {
        Some(subject) => subject,
        None => return false,
    };

    if subject.is_superuser {
        return true;
    }

    if requirement.is_empty() {
        return true;
    }

    subject
        .effective_permissions()
        .contains_any(requirement.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Subject;
    use uuid::Uuid;

    fn plain_user() -> Identity {
        Identity::Authenticated(Subject::new(Uuid::now_v7(), "user@example.com"))
    }

    fn document_user() -> Identity {
        Identity::Authenticated(
            Subject::new(Uuid::now_v7(), "user@example.com")
                .with_grant("Пользователь", ["view_own_documents"]),
        )
    }

    #[test]
    fn test_anonymous_is_denied() {
        static ANY: Requirement = Requirement::authenticated();
        static DOCS: Requirement = Requirement::any(&["view_own_documents"]);

        assert!(!authorize(&Identity::Anonymous, &ANY));
        assert!(!authorize(&Identity::Anonymous, &DOCS));
    }

    #[test]
    fn test_superuser_bypasses_everything() {
        let root =
            Identity::Authenticated(Subject::new(Uuid::now_v7(), "root@example.com").superuser());

        static DOCS: Requirement = Requirement::any(&["view_own_documents"]);
        static NONEXISTENT: Requirement = Requirement::any(&["no_such_permission_anywhere"]);
        static EMPTY: Requirement = Requirement::authenticated();

        assert!(authorize(&root, &DOCS));
        assert!(authorize(&root, &NONEXISTENT));
        assert!(authorize(&root, &EMPTY));
    }

    #[test]
    fn test_empty_requirement_admits_any_authenticated() {
        static EMPTY: Requirement = Requirement::authenticated();
        assert!(authorize(&plain_user(), &EMPTY));
    }

    #[test]
    fn test_no_roles_denied_for_nonempty_requirement() {
        static DOCS: Requirement = Requirement::any(&["view_own_documents"]);
        assert!(!authorize(&plain_user(), &DOCS));
    }

    #[test]
    fn test_any_of_semantics() {
        let user = document_user();

        // Holding one of several listed permissions is enough.
        static EITHER: Requirement =
            Requirement::any(&["view_financial_reports", "view_own_documents"]);
        assert!(authorize(&user, &EITHER));

        static REPORTS_ONLY: Requirement = Requirement::any(&["view_financial_reports"]);
        assert!(!authorize(&user, &REPORTS_ONLY));
    }

    #[test]
    fn test_order_and_duplicates_irrelevant() {
        let user = document_user();

        static AB: Requirement =
            Requirement::any(&["view_financial_reports", "view_own_documents"]);
        static BA: Requirement =
            Requirement::any(&["view_own_documents", "view_financial_reports"]);
        static DUPED: Requirement = Requirement::any(&[
            "view_own_documents",
            "view_own_documents",
            "view_financial_reports",
        ]);

        assert_eq!(authorize(&user, &AB), authorize(&user, &BA));
        assert_eq!(authorize(&user, &AB), authorize(&user, &DUPED));
    }

    #[test]
    fn test_role_granted_twice_changes_nothing() {
        let once = document_user();
        let twice = Identity::Authenticated(
            Subject::new(Uuid::now_v7(), "user@example.com")
                .with_grant("Пользователь", ["view_own_documents"])
                .with_grant("Пользователь", ["view_own_documents"]),
        );

        static DOCS: Requirement = Requirement::any(&["view_own_documents"]);
        static REPORTS: Requirement = Requirement::any(&["view_financial_reports"]);

        assert_eq!(authorize(&once, &DOCS), authorize(&twice, &DOCS));
        assert_eq!(authorize(&once, &REPORTS), authorize(&twice, &REPORTS));
    }

    #[test]
    fn test_deterministic_for_a_snapshot() {
        let user = document_user();
        static DOCS: Requirement = Requirement::any(&["view_own_documents"]);

        let first = authorize(&user, &DOCS);
        for _ in 0..100 {
            assert_eq!(authorize(&user, &DOCS), first);
        }
    }
}
