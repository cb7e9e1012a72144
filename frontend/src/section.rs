use std::rc::Rc;

use futures::FutureExt;
use gloo_net::http::Method;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use rankup_core::{RoleQuery, SectionRole, SectionStore};

use crate::api::fetch_json;
use crate::models::MemberRank;
use crate::session::{use_session, SessionContext};
use crate::storage::BrowserStorage;

/// A role lookup that outlives this is treated as failed.
const ROLE_LOOKUP_TIMEOUT_MS: u32 = 10_000;

/* -------------------------------------------------------------------------- */
/*                              section context                               */
/* -------------------------------------------------------------------------- */

#[derive(Clone, PartialEq)]
pub struct SectionState {
    store: SectionStore<BrowserStorage>,
}

pub enum SectionAction {
    Select { id: i64, role: Option<SectionRole> },
    /// Identity changed; any resolved role belongs to the previous user.
    Invalidate,
    Begin(RoleQuery),
    Finished { query: RoleQuery, rank: Option<String> },
}

impl Reducible for SectionState {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            SectionAction::Select { id, role } => store.select(id, role),
            SectionAction::Invalidate => store.invalidate_role(),
            SectionAction::Begin(query) => store.begin_resolution(query),
            SectionAction::Finished { query, rank } => {
                store.finish_resolution(query, rank.as_deref())
            }
        }
        Rc::new(Self { store })
    }
}

impl SectionState {
    pub fn section_id(&self) -> Option<i64> {
        self.store.section_id()
    }

    pub fn role(&self) -> Option<SectionRole> {
        self.store.role()
    }

    pub fn store(&self) -> &SectionStore<BrowserStorage> {
        &self.store
    }
}

pub type SectionContext = UseReducerHandle<SectionState>;

#[hook]
pub fn use_section() -> SectionContext {
    use_context::<SectionContext>().expect("SectionProvider missing")
}

/* -------------------------------------------------------------------------- */
/*                              role resolution                               */
/* -------------------------------------------------------------------------- */

/// Fires the role lookup the store says is owed, if any. Safe to call on
/// every render: the store hands out one query per `(user, section)` pair and
/// discards completions whose tag no longer matches.
pub fn ensure_role(session: &SessionContext, section: &SectionContext) {
    let Some(query) = section.store.pending_query(session.user()) else {
        return;
    };
    section.dispatch(SectionAction::Begin(query));

    let section = section.clone();
    spawn_local(async move {
        let path = format!("/sections/{}/members/{}", query.section_id, query.user_id);
        let lookup = fetch_json::<(), MemberRank>(Method::GET, &path, None::<&()>).fuse();
        let timeout = TimeoutFuture::new(ROLE_LOOKUP_TIMEOUT_MS).fuse();
        futures::pin_mut!(lookup, timeout);

        let rank = futures::select! {
            res = lookup => match res {
                Ok(member) => Some(member.rank),
                Err(err) => {
                    log::warn!("role lookup failed: {err:?}");
                    None
                }
            },
            _ = timeout => {
                log::warn!("role lookup timed out after {ROLE_LOOKUP_TIMEOUT_MS} ms");
                None
            }
        };

        section.dispatch(SectionAction::Finished { query, rank });
    });
}

/* -------------------------------------------------------------------------- */
/*                                 provider                                   */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SectionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Must sit inside [`crate::session::SessionProvider`]: the resolved role is
/// dropped whenever the identity changes.
#[function_component(SectionProvider)]
pub fn section_provider(props: &SectionProviderProps) -> Html {
    let session = use_session();
    let section = use_reducer(|| SectionState {
        store: SectionStore::new(BrowserStorage),
    });

    {
        let section = section.clone();
        let user_id = session.user().map(|user| user.id);
        use_effect_with(user_id, move |_| {
            section.dispatch(SectionAction::Invalidate);
            || ()
        });
    }

    html! {
        <ContextProvider<SectionContext> context={section}>
            { for props.children.iter() }
        </ContextProvider<SectionContext>>
    }
}
