use gloo_net::http::Method;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_empty;
use crate::models::RegisterRequest;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                           client-side validation                           */
/* -------------------------------------------------------------------------- */

fn valid_email(v: &str) -> bool {
    let Some((local, domain)) = v.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !v.contains(char::is_whitespace)
}

/// JMBAG: exactly 10 digits.
fn valid_jmbag(v: &str) -> bool {
    v.len() == 10 && v.chars().all(|c| c.is_ascii_digit())
}

/// 8–30 chars with an upper, a lower, a digit and a special character.
fn valid_password(v: &str) -> bool {
    let len = v.chars().count();
    (8..=30).contains(&len)
        && v.chars().any(|c| c.is_ascii_uppercase())
        && v.chars().any(|c| c.is_ascii_lowercase())
        && v.chars().any(|c| c.is_ascii_digit())
        && v.chars().any(|c| !c.is_alphanumeric())
}

fn validate(form: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if form.first_name.is_empty() {
        errors.push("Ime je obvezno".into());
    } else if form.first_name.chars().count() > 30 {
        errors.push("Ime je predugo (max 30)".into());
    }

    if form.last_name.is_empty() {
        errors.push("Prezime je obvezno".into());
    } else if form.last_name.chars().count() > 30 {
        errors.push("Prezime je predugo (max 30)".into());
    }

    if !valid_jmbag(&form.jmbag) {
        errors.push("JMBAG mora imati točno 10 znamenki".into());
    }

    if form.email.chars().count() > 50 {
        errors.push("Email je predug (max 50)".into());
    } else if !valid_email(&form.email) {
        errors.push("Email nije valjan".into());
    }

    if !valid_password(&form.password) {
        errors.push(
            "Lozinka mora imati 8-30 znakova, veliko slovo, malo slovo, broj i specijalni znak"
                .into(),
        );
    }

    if form.password != form.repeat_password {
        errors.push("Lozinke se ne podudaraju".into());
    }

    errors
}

/* -------------------------------------------------------------------------- */
/*                             registration page                              */
/* -------------------------------------------------------------------------- */

#[function_component(Registration)]
pub fn registration() -> Html {
    let navigator = use_navigator().unwrap();

    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let jmbag_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let repeat_ref = use_node_ref();

    let errors = use_state(Vec::<String>::new);
    let status = use_state(String::new);

    let onsubmit = {
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let jmbag_ref = jmbag_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let repeat_ref = repeat_ref.clone();
        let errors = errors.clone();
        let status = status.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let value = |r: &NodeRef| r.cast::<HtmlInputElement>().unwrap().value();
            let form = RegisterRequest {
                first_name: value(&first_name_ref).trim().to_string(),
                last_name: value(&last_name_ref).trim().to_string(),
                jmbag: value(&jmbag_ref).trim().to_string(),
                email: value(&email_ref).trim().to_string(),
                password: value(&password_ref),
                repeat_password: value(&repeat_ref),
            };

            let found = validate(&form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());

            let errors = errors.clone();
            let status = status.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match fetch_empty(Method::POST, "/auth/register", Some(&form)).await {
                    Ok(()) => {
                        status.set("Registracija uspješna! Preusmjeravam na prijavu…".into());
                        TimeoutFuture::new(1_700).await;
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        log::warn!("registration failed: {err:?}");
                        errors.set(vec![
                            "Došlo je do pogreške prilikom registracije.".into(),
                        ]);
                    }
                }
            });
        })
    };

    html! {
        <div class="form-container">
            <h2>{ "Registracija" }</h2>

            <form {onsubmit}>
                <input ref={first_name_ref} type="text" placeholder="Ime" />
                <input ref={last_name_ref} type="text" placeholder="Prezime" />
                <input ref={jmbag_ref} type="text" placeholder="JMBAG" />
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Lozinka" />
                <input ref={repeat_ref} type="password" placeholder="Ponovi lozinku" />
                <button type="submit">{ "Registriraj se" }</button>
            </form>

            { for errors.iter().map(|e| html!(<p class="error-msg">{ e }</p>)) }

            if !status.is_empty() {
                <p class="status-msg">{ &*status }</p>
            }

            <p>
                { "Već imaš račun? " }
                <Link<Route> to={Route::Login}>{ "Prijavi se" }</Link<Route>>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jmbag_must_be_ten_digits() {
        assert!(valid_jmbag("0036512345"));
        assert!(!valid_jmbag("003651234"));
        assert!(!valid_jmbag("00365123456"));
        assert!(!valid_jmbag("003651234a"));
    }

    #[test]
    fn password_needs_all_character_classes() {
        assert!(valid_password("Test123!x"));
        assert!(!valid_password("test123!"));
        assert!(!valid_password("TEST123!"));
        assert!(!valid_password("Testtest!"));
        assert!(!valid_password("Test1234"));
        assert!(!valid_password("T1!a"));
    }

    #[test]
    fn email_needs_domain_with_dot() {
        assert!(valid_email("ana@fer.hr"));
        assert!(!valid_email("ana@fer"));
        assert!(!valid_email("ana.fer.hr"));
        assert!(!valid_email("an a@fer.hr"));
    }
}
