use gloo_dialogs::confirm;
use gloo_net::http::Method;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::{Section, SectionForm};
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                              section list                                  */
/* -------------------------------------------------------------------------- */

#[function_component(AllSections)]
pub fn all_sections() -> Html {
    let navigator = use_navigator().unwrap();

    let sections = use_state(Vec::<Section>::new);
    let loading = use_state(|| true);

    {
        let sections = sections.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), Vec<Section>>(Method::GET, "/sections", None::<&()>).await {
                    Ok(list) => sections.set(list),
                    Err(err) => error!("sections: {err:?}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_remove = {
        let sections = sections.clone();
        Callback::from(move |section: Section| {
            if !confirm(&format!("Obrisati sekciju \"{}\"?", section.name)) {
                return;
            }
            let sections = sections.clone();
            spawn_local(async move {
                let path = format!("/sections/{}", section.id);
                match fetch_empty::<()>(Method::DELETE, &path, None).await {
                    Ok(()) => {
                        let remaining =
                            sections.iter().filter(|s| s.id != section.id).cloned().collect();
                        sections.set(remaining);
                    }
                    Err(err) => error!("delete section {}: {err:?}", section.id),
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    html! {
        <>
            <h1>{ "Sve sekcije" }</h1>
            <p>
                <Link<Route> to={Route::SuperAddSection}>{ "➕ Nova sekcija" }</Link<Route>>
            </p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Naziv" }</th>
                        <th>{ "Opis" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for sections.iter().cloned().map(|section| {
                        let navigator = navigator.clone();
                        let on_remove = on_remove.clone();
                        let open = {
                            let section_id = section.id;
                            Callback::from(move |_| {
                                navigator.push(&Route::SuperEditSection { id: section_id });
                            })
                        };
                        let remove = {
                            let section = section.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                on_remove.emit(section.clone());
                            })
                        };
                        html! {
                            <tr key={section.id} onclick={open}>
                                <td>{ &section.name }</td>
                                <td>{ section.description_url.clone().unwrap_or_default() }</td>
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
/*                          create / edit section                             */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SectionEditorProps {
    /// `None` creates a new section, `Some` edits an existing one.
    pub id: Option<i64>,
}

#[function_component(SectionEditor)]
pub fn section_editor(props: &SectionEditorProps) -> Html {
    let navigator = use_navigator().unwrap();

    let name = use_state(String::new);
    let description = use_state(String::new);
    let message = use_state(String::new);
    let id = props.id;

    /* editing: prefill from the existing section */
    {
        let name = name.clone();
        let description = description.clone();
        use_effect_with(id, move |&id| {
            if let Some(id) = id {
                spawn_local(async move {
                    let path = format!("/sections/{id}");
                    match fetch_json::<(), Section>(Method::GET, &path, None::<&()>).await {
                        Ok(section) => {
                            name.set(section.name);
                            description.set(section.description_url.unwrap_or_default());
                        }
                        Err(err) => error!("section {id}: {err:?}"),
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
        let description = description.clone();
        let message = message.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            if name.trim().is_empty() {
                message.set("Naziv je obvezan".into());
                return;
            }

            let body = SectionForm {
                name: name.trim().to_string(),
                description: (*description).clone(),
            };
            let path = match id {
                Some(id) => format!("/sections/{id}"),
                None => "/sections".to_string(),
            };

            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match fetch_empty(Method::POST, &path, Some(&body)).await {
                    Ok(()) => navigator.push(&Route::SuperSections),
                    Err(err) => {
                        error!("save section: {err:?}");
                        message.set("Greška pri spremanju sekcije.".into());
                    }
                }
            });
        })
    };

    html! {
        <div class="form-container">
            <h2>{ if id.is_some() { "Ažuriraj sekciju" } else { "Nova sekcija" } }</h2>

            <form {onsubmit}>
                <input type="text" placeholder="Naziv"
                       value={(*name).clone()} oninput={bind(&name)} />
                <input type="text" placeholder="Kratki opis"
                       value={(*description).clone()} oninput={bind(&description)} />
                <button type="submit">{ if id.is_some() { "Spremi" } else { "Stvori" } }</button>
            </form>

            if !message.is_empty() {
                <p class="error-msg">{ &*message }</p>
            }
        </div>
    }
}
