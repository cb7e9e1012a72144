use std::rc::Rc;

use gloo_net::http::Method;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use rankup_core::{Identity, SessionStore};

use crate::api::fetch_json;
use crate::models::{LoginRequest, LoginResponse, MeResponse};
use crate::storage::BrowserStorage;

/* -------------------------------------------------------------------------- */
/*                              session context                               */
/* -------------------------------------------------------------------------- */

/// Reducer wrapper around the core session store. `boot_token` carries the
/// persisted token from startup to the one-time whoami effect; it is `None`
/// when the session settled immediately.
#[derive(Clone, PartialEq)]
pub struct Session {
    store: SessionStore<BrowserStorage>,
    boot_token: Option<String>,
}

pub enum SessionAction {
    /// Outcome of the startup whoami call.
    Settled(Option<Identity>),
    LoggedIn { token: String, user: Identity },
    LoginFailed,
    Logout,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            SessionAction::Settled(user) => store.finish_bootstrap(user),
            SessionAction::LoggedIn { token, user } => store.login_succeeded(&token, user),
            SessionAction::LoginFailed => store.login_failed(),
            SessionAction::Logout => store.logout(),
        }
        Rc::new(Self { store, boot_token: None })
    }
}

impl Session {
    pub fn user(&self) -> Option<&Identity> {
        self.store.user()
    }

    pub fn settled(&self) -> bool {
        self.store.settled()
    }

    pub fn store(&self) -> &SessionStore<BrowserStorage> {
        &self.store
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider missing")
}

/* -------------------------------------------------------------------------- */
/*                                 operations                                 */
/* -------------------------------------------------------------------------- */

/// POST `auth/login`. Success installs the identity (merging the sibling `id`
/// and `superAdmin` fields); any failure collapses to logged-out. Nothing is
/// surfaced to the caller, it observes the identity staying absent.
pub fn login(session: &SessionContext, email: String, password: String) {
    let session = session.clone();
    spawn_local(async move {
        let body = LoginRequest { email, password };
        match fetch_json::<_, LoginResponse>(Method::POST, "/auth/login", Some(&body)).await {
            Ok(resp) => {
                let mut user = resp.user;
                user.id = resp.id;
                user.super_admin = resp.super_admin;
                session.dispatch(SessionAction::LoggedIn { token: resp.token, user });
            }
            Err(err) => {
                log::warn!("login request failed: {err:?}");
                session.dispatch(SessionAction::LoginFailed);
            }
        }
    });
}

/* -------------------------------------------------------------------------- */
/*                               provider                                     */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(|| {
        let mut store = SessionStore::new(BrowserStorage);
        // settles immediately when no token is persisted
        let boot_token = store.begin();
        Session { store, boot_token }
    });

    /* ------------ one-time bootstrap from the persisted token ------------- */
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if session.boot_token.is_some() {
                spawn_local(async move {
                    let user = fetch_json::<(), MeResponse>(Method::GET, "/auth/me", None::<&()>)
                        .await
                        .map(|resp| {
                            let mut user = resp.user;
                            user.id = resp.id;
                            user
                        })
                        .ok();
                    session.dispatch(SessionAction::Settled(user));
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}
