use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_json;
use crate::models::{ActivityEvent, ActivityResponse};
use crate::section::use_section;
use crate::session::use_session;
use crate::spinner::Spinner;

/* -------------------------------------------------------------------------- */
/*                             attendance history                             */
/* -------------------------------------------------------------------------- */

fn format_date_cro(iso_date: &str) -> String {
    let mut parts = iso_date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => {
            let month: u32 = month.parse().unwrap_or(0);
            let day: u32 = day.parse().unwrap_or(0);
            format!("{day}.{month}.{year}.")
        }
        _ => iso_date.to_string(),
    }
}

#[function_component(Activity)]
pub fn activity() -> Html {
    let session = use_session();
    let section = use_section();

    let events = use_state(Vec::<ActivityEvent>::new);
    let loading = use_state(|| true);

    let user_id = session.user().map(|user| user.id).unwrap_or_default();
    let section_id = section.section_id();

    {
        let events = events.clone();
        let loading = loading.clone();
        use_effect_with((section_id, user_id), move |&(section_id, user_id)| {
            let Some(section_id) = section_id else {
                loading.set(false);
                return;
            };
            spawn_local(async move {
                let path =
                    format!("/sections/{section_id}/members/{user_id}/profile/activities");
                match fetch_json::<(), ActivityResponse>(Method::GET, &path, None::<&()>).await {
                    Ok(resp) => events.set(resp.events),
                    Err(err) => error!("activities: {err:?}"),
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html!(<Spinner />);
    }

    let total: i32 = events.iter().map(|event| event.points).sum();

    html! {
        <>
            <h1>{ "Aktivnost" }</h1>
            <p>{ format!("{} događanja, {} bodova ukupno", events.len(), total) }</p>

            if events.is_empty() {
                <p>{ "Još nema zabilježenih dolazaka." }</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Događanje" }</th>
                            <th>{ "Datum" }</th>
                            <th>{ "Bodovi" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for events.iter().map(|event| html! {
                            <tr>
                                <td>{ &event.name }</td>
                                <td>{ format_date_cro(&event.date) }</td>
                                <td>{ event.points }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::format_date_cro;

    #[test]
    fn formats_iso_dates_without_leading_zeros() {
        assert_eq!(format_date_cro("2024-03-07"), "7.3.2024.");
        assert_eq!(format_date_cro("2024-11-23"), "23.11.2024.");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_date_cro("danas"), "danas");
    }
}
