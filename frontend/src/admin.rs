use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub mod events;
pub mod members;
pub mod points;

/* -------------------------------------------------------------------------- */
/*                              admin options                                 */
/* -------------------------------------------------------------------------- */

#[function_component(AdminMenu)]
pub fn admin_menu() -> Html {
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
            <h1>{ "Administracija sekcije" }</h1>

            <div class="card-grid">
                { card(Route::AdminEvents, "Događanja", "Pregled, dodavanje i brisanje događanja") }
                { card(Route::AdminMembers, "Članovi", "Pregled i uređivanje članova sekcije") }
                { card(Route::AdminPoints, "Bodovi", "Dodjela bodova za dolaske") }
            </div>
        </>
    }
}
