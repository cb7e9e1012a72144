use gloo_net::http::Method;
use log::error;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{Event, ParticipationRequest, SectionMember};
use crate::section::use_section;
use crate::spinner::Spinner;

/* -------------------------------------------------------------------------- */
/*                          manual point assignment                           */
/* -------------------------------------------------------------------------- */

/// Records a single member's attendance at a single event; the backend
/// derives the awarded points from the event type.
#[function_component(ManualPoints)]
pub fn manual_points() -> Html {
    let section = use_section();

    let events = use_state(Vec::<Event>::new);
    let members = use_state(Vec::<SectionMember>::new);
    let loading = use_state(|| true);
    let message = use_state(String::new);

    let event_ref = use_node_ref();
    let member_ref = use_node_ref();

    let section_id = section.section_id().unwrap_or_default();

    {
        let events = events.clone();
        let members = members.clone();
        let loading = loading.clone();
        use_effect_with(section_id, move |&section_id| {
            spawn_local(async move {
                let path = format!("/sections/{section_id}/event");
                match fetch_json::<(), Vec<Event>>(Method::GET, &path, None::<&()>).await {
                    Ok(list) => events.set(list),
                    Err(err) => error!("events: {err:?}"),
                }
                let path = format!("/sections/{section_id}/members");
                match fetch_json::<(), Vec<SectionMember>>(Method::GET, &path, None::<&()>).await {
                    Ok(list) => members.set(list),
                    Err(err) => error!("members: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let onsubmit = {
        let event_ref = event_ref.clone();
        let member_ref = member_ref.clone();
        let message = message.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let event_id: i64 = event_ref
                .cast::<HtmlSelectElement>()
                .unwrap()
                .value()
                .parse()
                .unwrap_or(-1);
            let member_id: i64 = member_ref
                .cast::<HtmlSelectElement>()
                .unwrap()
                .value()
                .parse()
                .unwrap_or(-1);

            if event_id < 0 {
                message.set("Molimo odaberi događaj.".into());
                return;
            }
            if member_id < 0 {
                message.set("Molimo odaberi člana.".into());
                return;
            }

            let body = ParticipationRequest { member_id, event_id };
            let message = message.clone();
            spawn_local(async move {
                let path = format!("/sections/{section_id}/participations");
                match fetch_empty(Method::POST, &path, Some(&body)).await {
                    Ok(()) => message.set("Bodovi dodijeljeni.".into()),
                    Err(err) => {
                        error!("participation: {err:?}");
                        message.set("Greška pri dodjeljivanju bodova. Pokušaj ponovo.".into());
                    }
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    html! {
        <div class="form-container">
            <h2>{ "Manualni unos bodova" }</h2>
            <p>{ "Dodijeli bodove pojedinačno za određeni događaj" }</p>

            <form {onsubmit}>
                <select ref={event_ref}>
                    <option value="-1" selected={true}>{ "Odaberi događaj…" }</option>
                    { for events.iter().map(|event| html! {
                        <option value={event.id.to_string()}>
                            { format!("{} {}", event.name, event.date) }
                        </option>
                    }) }
                </select>

                <select ref={member_ref}>
                    <option value="-1" selected={true}>{ "Odaberi člana…" }</option>
                    { for members.iter().map(|member| html! {
                        <option value={member.member_id.to_string()}>
                            { format!("{} {} {}", member.first_name, member.last_name, member.jmbag) }
                        </option>
                    }) }
                </select>

                <button type="submit">{ "Dodijeli bodove" }</button>
            </form>

            if !message.is_empty() {
                <p class="status-msg">{ &*message }</p>
            }
        </div>
    }
}
