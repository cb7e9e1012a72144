use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::models::MemberProfile;
use crate::section::use_section;
use crate::session::use_session;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                 profile                                    */
/* -------------------------------------------------------------------------- */

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    let section = use_section();

    let member = use_state(|| None::<MemberProfile>);
    let loading = use_state(|| true);

    let user_id = session.user().map(|user| user.id).unwrap_or_default();
    let section_id = section.section_id();

    {
        let member = member.clone();
        let loading = loading.clone();
        use_effect_with((section_id, user_id), move |&(section_id, user_id)| {
            let Some(section_id) = section_id else {
                loading.set(false);
                return;
            };
            spawn_local(async move {
                let path = format!("/sections/{section_id}/members/{user_id}/profile/general");
                match fetch_json::<(), MemberProfile>(Method::GET, &path, None::<&()>).await {
                    Ok(profile) => member.set(Some(profile)),
                    Err(err) => error!("profile: {err:?}"),
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html!(<Spinner />);
    }

    let Some(section_id) = section_id else {
        return html! {
            <>
                <h1>{ "Profil" }</h1>
                <p>{ "Odaberi sekciju da vidiš svoj rang i bodove." }</p>
                <Link<Route> to={Route::MySections}>{ "Moje sekcije" }</Link<Route>>
            </>
        };
    };

    match &*member {
        None => html! {
            <>
                <h1>{ "Profil" }</h1>
                <p>{ format!("Podaci za sekciju {section_id} nisu dostupni.") }</p>
            </>
        },
        Some(profile) => {
            let needed = profile.additional_points_needed.max(0);
            html! {
                <>
                    <h1>{ format!("{} {}", profile.first_name, profile.last_name) }</h1>
                    <p>{ format!("JMBAG: {}", profile.jmbag) }</p>

                    <div class="card-grid">
                        <div class="card">
                            <h3>{ "Rang" }</h3>
                            <p>{ &profile.rank_name }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Bodovi u semestru" }</h3>
                            <p>{ profile.points_semester }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Ukupni bodovi" }</h3>
                            <p>{ profile.points_total }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Do sljedećeg ranga" }</h3>
                            <p>{ format!("još {needed} bodova") }</p>
                        </div>
                    </div>

                    <p>
                        <Link<Route> to={Route::Activity}>{ "Pregled aktivnosti" }</Link<Route>>
                    </p>
                </>
            }
        }
    }
}
