use yew::prelude::*;

/// Loading placeholder shown while the session or a role lookup settles.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner">
            <p>{ "Učitavanje…" }</p>
        </div>
    }
}
