use gloo_net::http::Method;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{Semester, SemesterForm};
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                              semester list                                 */
/* -------------------------------------------------------------------------- */

#[function_component(AllSemesters)]
pub fn all_semesters() -> Html {
    let navigator = use_navigator().unwrap();

    let semesters = use_state(Vec::<Semester>::new);
    let loading = use_state(|| true);

    {
        let semesters = semesters.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), Vec<Semester>>(Method::GET, "/semesters", None::<&()>).await
                {
                    Ok(mut list) => {
                        // newest first
                        list.sort_by(|a, b| b.date_to.cmp(&a.date_to));
                        semesters.set(list);
                    }
                    Err(err) => error!("semesters: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html!(<Spinner />);
    }

    html! {
        <>
            <h1>{ "Semestri" }</h1>
            <p>
                <Link<Route> to={Route::SuperAddSemester}>{ "➕ Novi semestar" }</Link<Route>>
            </p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Naziv" }</th>
                        <th>{ "Od" }</th>
                        <th>{ "Do" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for semesters.iter().map(|semester| {
                        let navigator = navigator.clone();
                        let semester_id = semester.id;
                        let open = Callback::from(move |_| {
                            navigator.push(&Route::SuperEditSemester { id: semester_id });
                        });
                        html! {
                            <tr key={semester.id} onclick={open}>
                                <td>{ &semester.name }</td>
                                <td>{ &semester.date_from }</td>
                                <td>{ &semester.date_to }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </>
    }
}

/* -------------------------------------------------------------------------- */
/*                          create / edit semester                            */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SemesterEditorProps {
    pub id: Option<i64>,
}

#[function_component(SemesterEditor)]
pub fn semester_editor(props: &SemesterEditorProps) -> Html {
    let navigator = use_navigator().unwrap();

    let name = use_state(String::new);
    let date_from = use_state(String::new);
    let date_to = use_state(String::new);
    let message = use_state(String::new);
    let id = props.id;

    {
        let name = name.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        use_effect_with(id, move |&id| {
            if let Some(id) = id {
                spawn_local(async move {
                    let path = format!("/semesters/{id}");
                    match fetch_json::<(), Semester>(Method::GET, &path, None::<&()>).await {
                        Ok(semester) => {
                            name.set(semester.name);
                            date_from.set(semester.date_from);
                            date_to.set(semester.date_to);
                        }
                        Err(err) => error!("semester {id}: {err:?}"),
                    }
                });
            }
            || ()
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let message = message.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            if name.trim().is_empty() || date_from.is_empty() || date_to.is_empty() {
                message.set("Sva polja su obvezna".into());
                return;
            }

            let body = SemesterForm {
                name: name.trim().to_string(),
                date_from: (*date_from).clone(),
                date_to: (*date_to).clone(),
            };
            let path = match id {
                Some(id) => format!("/semesters/{id}"),
                None => "/semesters".to_string(),
            };

            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match fetch_empty(Method::POST, &path, Some(&body)).await {
                    Ok(()) => navigator.push(&Route::SuperSemesters),
                    Err(err) => {
                        error!("save semester: {err:?}");
                        message.set("Greška pri spremanju semestra.".into());
                    }
                }
            });
        })
    };

    html! {
        <div class="form-container">
            <h2>{ if id.is_some() { "Ažuriraj semestar" } else { "Novi semestar" } }</h2>
            <p>{ "Naziv u formatu \"23/24 ZS\" ili \"25/26 LJS\"" }</p>

            <form {onsubmit}>
                <input type="text" placeholder="Naziv"
                       value={(*name).clone()} oninput={bind(&name)} />
                <input type="date" value={(*date_from).clone()} oninput={bind(&date_from)} />
                <input type="date" value={(*date_to).clone()} oninput={bind(&date_to)} />
                <button type="submit">{ if id.is_some() { "Spremi" } else { "Stvori" } }</button>
            </form>

            if !message.is_empty() {
                <p class="error-msg">{ &*message }</p>
            }
        </div>
    }
}
