use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="form-container">
            <h2>{ "O aplikaciji" }</h2>
            <p>
                { "RankUp prati dolaske na događanja sportskih sekcija, dodjeljuje \
                   bodove za sudjelovanje i rangira članove na ljestvici sekcije." }
            </p>
            <p>
                { "Pridruži se sekciji, skupljaj bodove i napreduj kroz rangove — \
                   od Pijuna do Kralja." }
            </p>
            <Link<Route> to={Route::Login}>{ "Natrag na prijavu" }</Link<Route>>
        </div>
    }
}
