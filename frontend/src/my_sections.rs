use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use rankup_core::SectionRole;

use crate::api::fetch_json;
use crate::models::EnrolledSection;
use crate::section::{use_section, SectionAction};
use crate::session::use_session;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                             enrolled sections                              */
/* -------------------------------------------------------------------------- */

/// Opening a section makes it the active one; the role is already known from
/// the membership's rank, so it is installed directly instead of re-fetched.
#[function_component(MySections)]
pub fn my_sections() -> Html {
    let session = use_session();
    let section_ctx = use_section();
    let navigator = use_navigator().unwrap();

    let mine = use_state(Vec::<EnrolledSection>::new);
    let loading = use_state(|| true);
    let user_id = session.user().map(|user| user.id).unwrap_or_default();

    {
        let mine = mine.clone();
        let loading = loading.clone();
        use_effect_with(user_id, move |&user_id| {
            spawn_local(async move {
                let path = format!("/members/{user_id}/sections");
                match fetch_json::<(), Vec<EnrolledSection>>(Method::GET, &path, None::<&()>).await
                {
                    Ok(sections) => mine.set(sections),
                    Err(err) => error!("memberships: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_open = {
        let section_ctx = section_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |section: EnrolledSection| {
            let role = SectionRole::try_from_rank(&section.rank).ok();
            section_ctx.dispatch(SectionAction::Select { id: section.id, role });
            let target = match role {
                Some(SectionRole::Admin) => Route::Admin,
                Some(SectionRole::Superadmin) => Route::Superadmin,
                _ => Route::Profile,
            };
            navigator.push(&target);
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    html! {
        <>
            <h1>{ "Moje sekcije" }</h1>

            if mine.is_empty() {
                <p>{ "Nisi upisan ni u jednu sekciju." }</p>
                <Link<Route> to={Route::Join}>{ "Pronađi sekciju" }</Link<Route>>
            } else {
                <div class="card-grid">
                    { for mine.iter().cloned().map(|section| {
                        let on_open = on_open.clone();
                        let clicked = section.clone();
                        html! {
                            <div class="card" key={section.id}
                                 onclick={Callback::from(move |_| on_open.emit(clicked.clone()))}>
                                <h3>{ &section.name }</h3>
                                <p>{ format!("Rang: {}", section.rank) }</p>
                            </div>
                        }
                    }) }
                </div>
            }
        </>
    }
}
