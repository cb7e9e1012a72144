use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                home page                                   */
/* -------------------------------------------------------------------------- */

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    let first_name = session
        .user()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    let card = |route: Route, title: &str, text: &str| {
        let navigator = navigator.clone();
        let title = title.to_string();
        let text = text.to_string();
        let onclick = Callback::from(move |_| navigator.push(&route));
        html! {
            <div class="card" {onclick}>
                <h3>{ title }</h3>
                <p>{ text }</p>
            </div>
        }
    };

    html! {
        <>
            <h1>{ format!("Bok, {first_name}!") }</h1>
            <p>{ "Skupljaj bodove dolascima na događanja i popni se na ljestvici svoje sekcije." }</p>

            <div class="card-grid">
                { card(Route::Scoreboards, "Ljestvica", "Poredak članova po bodovima") }
                { card(Route::MySections, "Moje sekcije", "Sekcije u koje si upisan") }
                { card(Route::Join, "Pridruži se", "Pregled svih sekcija") }
                { card(Route::Profile, "Profil", "Tvoj rang i bodovi") }
            </div>
        </>
    }
}
