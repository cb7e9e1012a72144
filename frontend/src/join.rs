use std::collections::HashSet;

use gloo_net::http::Method;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use rankup_core::SectionRole;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{EnrolledSection, JoinRequest, Section};
use crate::section::{use_section, SectionAction};
use crate::session::use_session;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                         all sections + enrollment                          */
/* -------------------------------------------------------------------------- */

#[function_component(Join)]
pub fn join() -> Html {
    let session = use_session();
    let section_ctx = use_section();
    let navigator = use_navigator().unwrap();

    let sections = use_state(Vec::<Section>::new);
    let enrolled = use_state(HashSet::<i64>::new);
    let query = use_state(String::new);
    let loading = use_state(|| true);

    let user = session.user().cloned();
    let (user_id, jmbag) = match &user {
        Some(user) => (user.id, user.jmbag.clone()),
        None => (0, String::new()),
    };

    /* ------------- load every section + my memberships ------------------- */
    {
        let sections = sections.clone();
        let enrolled = enrolled.clone();
        let loading = loading.clone();
        use_effect_with(user_id, move |&user_id| {
            spawn_local(async move {
                match fetch_json::<(), Vec<Section>>(Method::GET, "/sections", None::<&()>).await {
                    Ok(all) => sections.set(all),
                    Err(err) => error!("sections: {err:?}"),
                }
                let path = format!("/members/{user_id}/sections");
                match fetch_json::<(), Vec<EnrolledSection>>(Method::GET, &path, None::<&()>).await
                {
                    Ok(mine) => enrolled.set(mine.into_iter().map(|s| s.id).collect()),
                    Err(err) => error!("memberships: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    /* new members always start at the bottom rank */
    let on_join = {
        let section_ctx = section_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: i64| {
            let section_ctx = section_ctx.clone();
            let navigator = navigator.clone();
            let body = JoinRequest { jmbag: jmbag.clone(), rank_name: "Pijun".into() };
            spawn_local(async move {
                let path = format!("/sections/{id}/members");
                match fetch_empty(Method::POST, &path, Some(&body)).await {
                    Ok(()) => {
                        section_ctx.dispatch(SectionAction::Select {
                            id,
                            role: Some(SectionRole::User),
                        });
                        navigator.push(&Route::Profile);
                    }
                    Err(err) => error!("join section {id}: {err:?}"),
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    let needle = query.to_lowercase();
    let visible = sections
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect::<Vec<_>>();

    html! {
        <>
            <h1>{ "Sve sekcije" }</h1>
            <p>{ "Istraži i pridruži se sportskim sekcijama" }</p>

            <input type="text" placeholder="Pretraži sekcije…" value={(*query).clone()} {oninput} />

            <div class="card-grid">
                { for visible.into_iter().map(|s| {
                    let is_member = enrolled.contains(&s.id);
                    let on_join = on_join.clone();
                    let id = s.id;
                    html! {
                        <div class="card" key={s.id}>
                            <h3>{ &s.name }</h3>
                            if let Some(url) = &s.description_url {
                                <p>{ url }</p>
                            }
                            if is_member {
                                <p class="status-msg">{ "Već si član" }</p>
                            } else {
                                <button onclick={Callback::from(move |_| on_join.emit(id))}>
                                    { "Pridruži se" }
                                </button>
                            }
                        </div>
                    }
                }) }
            </div>
        </>
    }
}
