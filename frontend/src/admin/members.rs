use gloo_dialogs::confirm;
use gloo_net::http::Method;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::models::SectionMember;
use crate::section::use_section;
use crate::spinner::Spinner;

/* -------------------------------------------------------------------------- */
/*                             section members                                */
/* -------------------------------------------------------------------------- */

#[function_component(AllMembers)]
pub fn all_members() -> Html {
    let section = use_section();

    let members = use_state(Vec::<SectionMember>::new);
    let query = use_state(String::new);
    let loading = use_state(|| true);

    let section_id = section.section_id().unwrap_or_default();

    {
        let members = members.clone();
        let loading = loading.clone();
        use_effect_with(section_id, move |&section_id| {
            spawn_local(async move {
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

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_remove = {
        let members = members.clone();
        Callback::from(move |member: SectionMember| {
            let prompt = format!(
                "Izbaciti člana {} {} iz sekcije?",
                member.first_name, member.last_name
            );
            if !confirm(&prompt) {
                return;
            }
            let members = members.clone();
            spawn_local(async move {
                let path = format!("/sections/{section_id}/members/{}", member.member_id);
                match fetch_empty::<()>(Method::DELETE, &path, None).await {
                    Ok(()) => {
                        let remaining = members
                            .iter()
                            .filter(|m| m.member_id != member.member_id)
                            .cloned()
                            .collect();
                        members.set(remaining);
                    }
                    Err(err) => error!("remove member {}: {err:?}", member.member_id),
                }
            });
        })
    };

    if *loading {
        return html!(<Spinner />);
    }

    let needle = query.to_lowercase();
    let visible = members
        .iter()
        .filter(|m| {
            let full_name = format!("{} {}", m.first_name, m.last_name).to_lowercase();
            full_name.contains(&needle) || m.jmbag.contains(needle.as_str())
        })
        .cloned()
        .collect::<Vec<_>>();

    html! {
        <>
            <h1>{ "Članovi sekcije" }</h1>

            <input type="text" placeholder="Pretraži po imenu ili JMBAG-u…"
                   value={(*query).clone()} {oninput} />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Član" }</th>
                        <th>{ "JMBAG" }</th>
                        <th>{ "Status" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.into_iter().map(|member| {
                        let on_remove = on_remove.clone();
                        let row = member.clone();
                        html! {
                            <tr key={member.jmbag.clone()}>
                                <td>{ format!("{} {}", member.first_name, member.last_name) }</td>
                                <td>{ &member.jmbag }</td>
                                <td>{ if member.active { "Aktivan" } else { "Neaktivan" } }</td>
                                <td>
                                    <button class="danger"
                                            onclick={Callback::from(move |_| on_remove.emit(row.clone()))}>
                                        { "Izbaci" }
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
