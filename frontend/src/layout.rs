use yew::prelude::*;
use yew_router::prelude::*;

use rankup_core::SectionRole;

use crate::section::use_section;
use crate::session::{use_session, SessionAction};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                  logout                                    */
/* -------------------------------------------------------------------------- */

#[function_component(Logout)]
pub fn logout() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    let onclick = Callback::from(move |_| {
        session.dispatch(SessionAction::Logout);
        navigator.replace(&Route::Login);
    });

    html! { <button {onclick}>{ "Odjava" }</button> }
}

/* -------------------------------------------------------------------------- */
/*                                main layout                                 */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Header + role-aware navigation around every guarded page. Access control
/// is the guards' job; the layout only decides which links to offer.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    let section = use_section();
    let role = section.role();

    html! {
        <>
            <header class="header">
                <div class="header-title">{ "RankUp" }</div>
                <div class="header-logout">
                    if session.user().is_some() {
                        <Logout />
                    }
                </div>
            </header>

            <nav class="nav">
                <ul class="nav-list">
                    <li class="nav-item"><Link<Route> to={Route::Home}>{ "Početna" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::MySections}>{ "Moje sekcije" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Join}>{ "Pridruži se" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Profile}>{ "Profil" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Scoreboards}>{ "Ljestvica" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::About}>{ "O aplikaciji" }</Link<Route>></li>
                    if role == Some(SectionRole::Admin) {
                        <li class="nav-item"><Link<Route> to={Route::Admin}>{ "Administracija" }</Link<Route>></li>
                    }
                    if role == Some(SectionRole::Superadmin) {
                        <li class="nav-item"><Link<Route> to={Route::Superadmin}>{ "Superadmin" }</Link<Route>></li>
                    }
                </ul>
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
