use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::models::ScoreboardEntry;
use crate::section::use_section;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                           scoreboard kind list                             */
/* -------------------------------------------------------------------------- */

const KINDS: [(&str, &str, &str); 3] = [
    ("semester", "Semestar", "Bodovi u semestru"),
    ("year", "Godina", "Bodovi ove godine"),
    ("total", "Ukupno", "Svi bodovi ikad"),
];

#[function_component(ScoreboardList)]
pub fn scoreboard_list() -> Html {
    let navigator = use_navigator().unwrap();

    html! {
        <>
            <h1>{ "Ljestvice" }</h1>

            <div class="card-grid">
                { for KINDS.iter().map(|&(kind, title, description)| {
                    let navigator = navigator.clone();
                    let onclick = Callback::from(move |_| {
                        navigator.push(&Route::Scoreboard { kind: kind.to_string() });
                    });
                    html! {
                        <div class="card" key={kind} {onclick}>
                            <h3>{ title }</h3>
                            <p>{ description }</p>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

/* -------------------------------------------------------------------------- */
/*                              ranked table                                  */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub kind: String,
}

#[function_component(Scoreboard)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    let section = use_section();
    let entries = use_state(Vec::<ScoreboardEntry>::new);
    let loading = use_state(|| true);

    let section_id = section.section_id();
    let kind = props.kind.clone();

    {
        let entries = entries.clone();
        let loading = loading.clone();
        use_effect_with((section_id, kind.clone()), move |(section_id, kind)| {
            let Some(section_id) = *section_id else {
                loading.set(false);
                return;
            };
            let kind = kind.clone();
            spawn_local(async move {
                let path = format!("/sections/{section_id}/scoreboard/{kind}");
                match fetch_json::<(), Vec<ScoreboardEntry>>(Method::GET, &path, None::<&()>).await
                {
                    Ok(rows) => entries.set(rows),
                    Err(err) => error!("scoreboard {kind}: {err:?}"),
                }
                loading.set(false);
            });
        });
    }

    let description = KINDS
        .iter()
        .find(|&&(k, ..)| k == props.kind)
        .map(|&(_, _, d)| d)
        .unwrap_or("Ljestvica");

    if *loading {
        return html!(<Spinner />);
    }

    if section_id.is_none() {
        return html! {
            <>
                <h1>{ "Ljestvica" }</h1>
                <p>{ "Odaberi sekciju da vidiš njenu ljestvicu." }</p>
                <Link<Route> to={Route::MySections}>{ "Moje sekcije" }</Link<Route>>
            </>
        };
    }

    html! {
        <>
            <h1>{ description }</h1>
            <p>{ format!("{} članova na ljestvici", entries.len()) }</p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "#" }</th>
                        <th>{ "Član" }</th>
                        <th>{ "Bodovi" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for entries.iter().enumerate().map(|(index, entry)| {
                        let position = index + 1;
                        let class = if position <= 3 { "scoreboard-row-top" } else { "" };
                        html! {
                            <tr {class}>
                                <td>{ position }</td>
                                <td>{ format!("{} {}", entry.first_name, entry.last_name) }</td>
                                <td>{ entry.points }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </>
    }
}
