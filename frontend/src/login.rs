use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{login, use_session};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                login page                                  */
/* -------------------------------------------------------------------------- */

/// Failed logins are silent here: the session collapses to logged-out and the
/// form simply stays. Success is observed through the identity appearing.
#[function_component(Login)]
pub fn login_form() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    /* ------- already (or freshly) logged in → route by account type ------- */
    {
        let navigator = navigator.clone();
        let user = session.user().cloned();
        use_effect_with(user, move |user| {
            if let Some(user) = user {
                if user.super_admin {
                    navigator.push(&Route::Superadmin);
                } else {
                    navigator.push(&Route::Home);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let password = password_ref.cast::<HtmlInputElement>().unwrap().value();
            login(&session, email, password);
        })
    };

    html! {
        <div class="login-container">
            <h2>{ "Prijava" }</h2>

            <form {onsubmit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Lozinka" />
                <button type="submit">{ "Prijavi se" }</button>
            </form>

            <p>
                { "Nemaš račun? " }
                <Link<Route> to={Route::Register}>{ "Registriraj se" }</Link<Route>>
            </p>
        </div>
    }
}
