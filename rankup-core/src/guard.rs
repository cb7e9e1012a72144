use crate::persist::KeyValueStore;
use crate::section::{SectionRole, SectionStore};
use crate::session::SessionStore;

/* -------------------------------------------------------------------------- */
/*                              guard evaluation                              */
/* -------------------------------------------------------------------------- */

/// What a route requires of the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Authenticated,
    Admin,
    Superadmin,
}

/// What the route component should do, re-evaluated on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Loading,
    RedirectToLogin,
}

/// Composes both stores into a navigation decision.
///
/// Role-gated levels redirect immediately once the session settles without an
/// identity, without waiting on the role. A role mismatch also redirects to
/// login; there is no separate forbidden destination.
pub fn evaluate<S: KeyValueStore>(
    level: AccessLevel,
    session: &SessionStore<S>,
    section: &SectionStore<S>,
) -> GuardOutcome {
    let required = match level {
        AccessLevel::Authenticated => {
            if !session.settled() {
                return GuardOutcome::Loading;
            }
            return if session.user().is_some() {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToLogin
            };
        }
        AccessLevel::Admin => SectionRole::Admin,
        AccessLevel::Superadmin => SectionRole::Superadmin,
    };

    if session.settled() && session.user().is_none() {
        return GuardOutcome::RedirectToLogin;
    }
    if !session.settled() || section.role_loading() {
        return GuardOutcome::Loading;
    }
    if section.role() == Some(required) {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/* -------------------------------------------------------------------------- */
/*                                    tests                                   */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use crate::section::RoleQuery;
    use crate::session::Identity;

    fn ana() -> Identity {
        Identity {
            id: 7,
            first_name: "Ana".into(),
            last_name: "K".into(),
            email: String::new(),
            jmbag: String::new(),
            super_admin: false,
        }
    }

    fn settled_session(user: Option<Identity>) -> SessionStore<MemoryStore> {
        let mut session = SessionStore::new(MemoryStore::new());
        session.begin();
        if let Some(user) = user {
            session.login_succeeded("t", user);
        }
        session
    }

    fn section_with_role(rank: &str) -> SectionStore<MemoryStore> {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);
        let query = RoleQuery { user_id: 7, section_id: 42 };
        section.begin_resolution(query);
        section.finish_resolution(query, Some(rank));
        section
    }

    #[test]
    fn unsettled_session_shows_loading_everywhere() {
        let session = SessionStore::new(MemoryStore::new());
        let section = SectionStore::new(MemoryStore::new());
        for level in [AccessLevel::Authenticated, AccessLevel::Admin, AccessLevel::Superadmin] {
            assert_eq!(evaluate(level, &session, &section), GuardOutcome::Loading);
        }
    }

    #[test]
    fn settled_anonymous_redirects_everywhere() {
        let session = settled_session(None);
        let section = SectionStore::new(MemoryStore::new());
        for level in [AccessLevel::Authenticated, AccessLevel::Admin, AccessLevel::Superadmin] {
            assert_eq!(evaluate(level, &session, &section), GuardOutcome::RedirectToLogin);
        }
    }

    #[test]
    fn anonymous_redirect_does_not_wait_on_role_loading() {
        let session = settled_session(None);
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);
        assert!(section.role_loading());

        assert_eq!(
            evaluate(AccessLevel::Admin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn private_route_renders_for_any_identity() {
        let session = settled_session(Some(ana()));
        let section = SectionStore::new(MemoryStore::new());
        assert_eq!(
            evaluate(AccessLevel::Authenticated, &session, &section),
            GuardOutcome::Render
        );
    }

    #[test]
    fn admin_renders_for_admin_but_superadmin_redirects() {
        let session = settled_session(Some(ana()));
        let section = section_with_role("Kralj");

        assert_eq!(evaluate(AccessLevel::Admin, &session, &section), GuardOutcome::Render);
        assert_eq!(
            evaluate(AccessLevel::Superadmin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn superadmin_renders_only_for_superadmin_rank() {
        let session = settled_session(Some(ana()));
        let section = section_with_role("Superadmin");

        assert_eq!(
            evaluate(AccessLevel::Superadmin, &session, &section),
            GuardOutcome::Render
        );
        // superadmin rank does not satisfy the admin-only gate
        assert_eq!(
            evaluate(AccessLevel::Admin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn plain_member_is_redirected_from_gated_routes() {
        let session = settled_session(Some(ana()));
        let section = section_with_role("Pijun");

        assert_eq!(
            evaluate(AccessLevel::Admin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn loading_while_role_is_owed_then_redirect_after_failed_lookup() {
        let session = settled_session(Some(ana()));
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        assert_eq!(evaluate(AccessLevel::Admin, &session, &section), GuardOutcome::Loading);

        let query = section.pending_query(session.user()).unwrap();
        section.begin_resolution(query);
        assert_eq!(evaluate(AccessLevel::Admin, &session, &section), GuardOutcome::Loading);

        section.finish_resolution(query, None);
        assert_eq!(
            evaluate(AccessLevel::Admin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn identity_without_section_settles_on_redirect() {
        let session = settled_session(Some(ana()));
        let section = SectionStore::new(MemoryStore::new());

        // no section selected: the role can never resolve, so the gate must
        // not hang on loading
        assert!(!section.role_loading());
        assert_eq!(
            evaluate(AccessLevel::Admin, &session, &section),
            GuardOutcome::RedirectToLogin
        );
    }
}
