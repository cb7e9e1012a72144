use log::warn;
use serde::{Deserialize, Serialize};

use crate::persist::{KeyValueStore, TOKEN_KEY};

/* -------------------------------------------------------------------------- */
/*                                  identity                                  */
/* -------------------------------------------------------------------------- */

/// The authenticated principal.
///
/// Deserializes straight from the backend's `user` payload; `id` and
/// `superAdmin` arrive as siblings of that payload on login and are merged in
/// by the caller, so both default here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub jmbag: String,
    #[serde(default)]
    pub super_admin: bool,
}

/* -------------------------------------------------------------------------- */
/*                                session store                               */
/* -------------------------------------------------------------------------- */

/// Single source of truth for "who is logged in".
///
/// `settled` flips to true exactly once, when the startup resolution attempt
/// completes (or is skipped because no token was persisted). The identity can
/// change any number of times afterwards; `settled` never reverts.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    user: Option<Identity>,
    settled: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, user: None, settled: false }
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn settled(&self) -> bool {
        self.settled
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Startup resolution. Returns the persisted token to verify, if any;
    /// with no token the session settles immediately and the whoami call is
    /// skipped entirely.
    pub fn begin(&mut self) -> Option<String> {
        match self.stored_token() {
            Some(token) => Some(token),
            None => {
                self.settled = true;
                None
            }
        }
    }

    /// Outcome of the startup whoami call. A failed resolution collapses to
    /// logged-out, dropping the token it was attempted with.
    pub fn finish_bootstrap(&mut self, identity: Option<Identity>) {
        match identity {
            Some(user) => self.user = Some(user),
            None => {
                warn!("stored token did not resolve to an identity; logging out");
                self.logout();
            }
        }
        self.settled = true;
    }

    /// Successful login: the token is persisted before the identity becomes
    /// visible in memory.
    pub fn login_succeeded(&mut self, token: &str, user: Identity) {
        self.storage.set(TOKEN_KEY, token);
        self.user = Some(user);
    }

    /// Any login failure (bad credentials, network, malformed response) is a
    /// logout; callers observe the identity staying absent, nothing is thrown.
    pub fn login_failed(&mut self) {
        warn!("login failed; clearing session");
        self.logout();
    }

    /// Idempotent: logging out while logged out only re-asserts absence.
    pub fn logout(&mut self) {
        if self.storage.get(TOKEN_KEY).is_some() {
            self.storage.remove(TOKEN_KEY);
        }
        self.user = None;
    }
}

/* -------------------------------------------------------------------------- */
/*                                    tests                                   */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    fn ana() -> Identity {
        Identity {
            id: 7,
            first_name: "Ana".into(),
            last_name: "K".into(),
            email: "ana@fer.hr".into(),
            jmbag: "0036512345".into(),
            super_admin: false,
        }
    }

    fn store_with_token(token: &str) -> SessionStore<MemoryStore> {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, token);
        SessionStore::new(storage)
    }

    #[test]
    fn settles_immediately_without_token() {
        let mut session = SessionStore::new(MemoryStore::new());
        assert!(!session.settled());

        assert_eq!(session.begin(), None);
        assert!(session.settled());
        assert!(session.user().is_none());
    }

    #[test]
    fn bootstrap_resolves_persisted_token_into_identity() {
        let mut session = store_with_token("abc123");

        assert_eq!(session.begin(), Some("abc123".into()));
        assert!(!session.settled());

        session.finish_bootstrap(Some(ana()));
        assert!(session.settled());
        assert_eq!(session.user(), Some(&ana()));
        assert_eq!(session.stored_token(), Some("abc123".into()));
    }

    #[test]
    fn failed_bootstrap_collapses_to_logged_out() {
        let mut session = store_with_token("expired");
        session.begin();
        session.finish_bootstrap(None);

        assert!(session.settled());
        assert!(session.user().is_none());
        assert_eq!(session.stored_token(), None);
    }

    #[test]
    fn settled_never_reverts_after_login_or_logout() {
        let mut session = SessionStore::new(MemoryStore::new());
        session.begin();
        assert!(session.settled());

        session.login_succeeded("t1", ana());
        assert!(session.settled());
        session.logout();
        assert!(session.settled());
        session.login_failed();
        assert!(session.settled());
    }

    #[test]
    fn login_persists_token_and_installs_identity() {
        let mut session = SessionStore::new(MemoryStore::new());
        session.begin();

        session.login_succeeded("fresh-token", ana());
        assert_eq!(session.stored_token(), Some("fresh-token".into()));
        assert_eq!(session.user(), Some(&ana()));
    }

    #[test]
    fn login_failure_clears_any_prior_state() {
        let mut session = store_with_token("old");
        session.begin();
        session.finish_bootstrap(Some(ana()));

        session.login_failed();
        assert!(session.user().is_none());
        assert_eq!(session.stored_token(), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = SessionStore::new(MemoryStore::new());
        session.begin();
        session.login_succeeded("t", ana());

        session.logout();
        session.logout();
        assert!(session.user().is_none());
        assert_eq!(session.stored_token(), None);
    }

    #[test]
    fn identity_deserializes_from_camel_case_user_payload() {
        let user: Identity =
            serde_json::from_str(r#"{"firstName":"Ana","lastName":"K"}"#).unwrap();
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.id, 0);
        assert!(!user.super_admin);
    }
}
