use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub mod sections;
pub mod semesters;

/* -------------------------------------------------------------------------- */
/*                            superadmin options                              */
/* -------------------------------------------------------------------------- */

#[function_component(SuperadminMenu)]
pub fn superadmin_menu() -> Html {
    let navigator = use_navigator().unwrap();

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
            <h1>{ "Superadmin" }</h1>

            <div class="card-grid">
                { card(Route::SuperSections, "Sekcije", "Dodavanje i uređivanje sekcija") }
                { card(Route::SuperSemesters, "Semestri", "Dodavanje i uređivanje semestara") }
            </div>
        </>
    }
}
