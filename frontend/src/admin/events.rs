use gloo_dialogs::confirm;
use gloo_net::http::Method;
use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{Event, NewEvent, Participant};
use crate::section::use_section;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                               event list                                   */
/* -------------------------------------------------------------------------- */

#[function_component(AllEvents)]
pub fn all_events() -> Html {
    let section = use_section();
    let navigator = use_navigator().unwrap();

    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);
    let section_id = section.section_id().unwrap_or_default();

    {
        let events = events.clone();
        let loading = loading.clone();
        use_effect_with(section_id, move |&section_id| {
            spawn_local(async move {
                let path = format!("/sections/{section_id}/event");
                match fetch_json::<(), Vec<Event>>(Method::GET, &path, None::<&()>).await {
                    Ok(list) => events.set(list),
                    Err(err) => error!("events: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_remove = {
        let events = events.clone();
        Callback::from(move |event: Event| {
            if !confirm(&format!("Obrisati događanje \"{}\"?", event.name)) {
                return;
            }
            let events = events.clone();
            spawn_local(async move {
                let path = format!("/sections/{section_id}/event/{}", event.id);
                match fetch_empty::<()>(Method::DELETE, &path, None).await {
                    Ok(()) => {
                        let remaining =
                            events.iter().filter(|e| e.id != event.id).cloned().collect();
                        events.set(remaining);
                    }
                    Err(err) => error!("delete event {}: {err:?}", event.id),
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    html! {
        <>
            <h1>{ "Događanja" }</h1>
            <p>
                <Link<Route> to={Route::AdminAddEvent}>{ "➕ Novo događanje" }</Link<Route>>
            </p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Naziv" }</th>
                        <th>{ "Datum" }</th>
                        <th>{ "Bodovi" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for events.iter().cloned().map(|event| {
                        let navigator = navigator.clone();
                        let on_remove = on_remove.clone();
                        let open = {
                            let event_id = event.id;
                            Callback::from(move |_| {
                                navigator.push(&Route::AdminEvent { id: event_id });
                            })
                        };
                        let remove = {
                            let event = event.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                on_remove.emit(event.clone());
                            })
                        };
                        html! {
                            <tr key={event.id} onclick={open}>
                                <td>{ &event.name }</td>
                                <td>{ &event.date }</td>
                                <td>{ event.points.map(|p| p.to_string()).unwrap_or_else(|| "-".into()) }</td>
                                <td><button class="danger" onclick={remove}>{ "Obriši" }</button></td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </>
    }
}

/* -------------------------------------------------------------------------- */
/*                               new event                                    */
/* -------------------------------------------------------------------------- */

#[function_component(AddEvent)]
pub fn add_event() -> Html {
    let section = use_section();
    let navigator = use_navigator().unwrap();

    let name_ref = use_node_ref();
    let date_ref = use_node_ref();
    let points_ref = use_node_ref();
    let message = use_state(String::new);

    let section_id = section.section_id().unwrap_or_default();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let date_ref = date_ref.clone();
        let points_ref = points_ref.clone();
        let message = message.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let name = name_ref.cast::<HtmlInputElement>().unwrap().value();
            let date = date_ref.cast::<HtmlInputElement>().unwrap().value();
            let points: i32 = points_ref
                .cast::<HtmlSelectElement>()
                .unwrap()
                .value()
                .parse()
                .unwrap_or(1);

            if name.trim().is_empty() {
                message.set("Naziv događanja je obavezan!".into());
                return;
            }
            if date.is_empty() {
                message.set("Datum je obavezan!".into());
                return;
            }

            let body = NewEvent {
                name: name.trim().to_string(),
                date,
                // event types map 1:1 onto point values, clamped to 1..=6
                id_event_type: points.clamp(1, 6),
                description: "Novo događanje stvoreno kroz admin panel.".into(),
            };

            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let path = format!("/sections/{section_id}/event");
                match fetch_empty(Method::POST, &path, Some(&body)).await {
                    Ok(()) => navigator.push(&Route::AdminEvents),
                    Err(err) => {
                        error!("create event: {err:?}");
                        message.set("Greška pri stvaranju događanja. Pokušaj ponovo.".into());
                    }
                }
            });
        })
    };

    html! {
        <div class="form-container">
            <h2>{ "Novo događanje" }</h2>

            <form {onsubmit}>
                <input ref={name_ref} type="text" placeholder="Naziv" />
                <input ref={date_ref} type="date" />
                <select ref={points_ref}>
                    { for (1..=6).map(|p| html!(<option value={p.to_string()}>{ format!("{p} bodova") }</option>)) }
                </select>
                <button type="submit">{ "Stvori" }</button>
            </form>

            if !message.is_empty() {
                <p class="error-msg">{ &*message }</p>
            }
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                       event detail with attendees                          */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct EventDetailProps {
    pub id: i64,
}

#[function_component(EventDetail)]
pub fn event_detail(props: &EventDetailProps) -> Html {
    let section = use_section();

    let event = use_state(|| None::<Event>);
    let attendees = use_state(Vec::<Participant>::new);
    let loading = use_state(|| true);

    let section_id = section.section_id().unwrap_or_default();
    let event_id = props.id;

    {
        let event = event.clone();
        let attendees = attendees.clone();
        let loading = loading.clone();
        use_effect_with((section_id, event_id), move |&(section_id, event_id)| {
            spawn_local(async move {
                let path = format!("/sections/{section_id}/event/{event_id}");
                match fetch_json::<(), Event>(Method::GET, &path, None::<&()>).await {
                    Ok(found) => event.set(Some(found)),
                    Err(err) => error!("event {event_id}: {err:?}"),
                }
                let path = format!("/sections/{section_id}/participations/event/{event_id}");
                match fetch_json::<(), Vec<Participant>>(Method::GET, &path, None::<&()>).await {
                    Ok(list) => attendees.set(list),
                    Err(err) => error!("participations: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_remove = {
        let attendees = attendees.clone();
        Callback::from(move |attendee: Participant| {
            let prompt = format!(
                "Ukloniti dolazak: {} {}?",
                attendee.first_name, attendee.last_name
            );
            if !confirm(&prompt) {
                return;
            }
            let attendees = attendees.clone();
            spawn_local(async move {
                let path = format!(
                    "/sections/{section_id}/participations/{event_id}/{}",
                    attendee.id
                );
                match fetch_empty::<()>(Method::DELETE, &path, None).await {
                    Ok(()) => {
                        let remaining = attendees
                            .iter()
                            .filter(|a| a.id != attendee.id)
                            .cloned()
                            .collect();
                        attendees.set(remaining);
                    }
                    Err(err) => error!("delete participation: {err:?}"),
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    let title = event
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Događanje".into());

    html! {
        <>
            <h1>{ title }</h1>
            if let Some(event) = &*event {
                <p>{ format!("Datum: {}", event.date) }</p>
                if let Some(description) = &event.description {
                    <p>{ description }</p>
                }
            }

            <h2>{ format!("Dolasci ({})", attendees.len()) }</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Član" }</th>
                        <th>{ "JMBAG" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for attendees.iter().cloned().map(|attendee| {
                        let on_remove = on_remove.clone();
                        let row = attendee.clone();
                        html! {
                            <tr key={attendee.id}>
                                <td>{ format!("{} {}", attendee.first_name, attendee.last_name) }</td>
                                <td>{ &attendee.jmbag }</td>
                                <td>
                                    <button class="danger"
                                            onclick={Callback::from(move |_| on_remove.emit(row.clone()))}>
                                        { "Ukloni" }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </>
    }
}
