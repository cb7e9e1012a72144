use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod guard;
mod layout;
mod models;
mod section;
mod session;
mod spinner;
mod storage;

// Pages
mod about;
mod activity;
mod admin;
mod home;
mod join;
mod login;
mod my_sections;
mod profile;
mod register;
mod scoreboard;
mod superadmin;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/about")]
    About,

    #[at("/")]
    Home,
    #[at("/my-sections")]
    MySections,
    #[at("/join")]
    Join,
    #[at("/profile")]
    Profile,
    #[at("/profile/activity")]
    Activity,
    #[at("/scoreboard")]
    Scoreboards,
    #[at("/scoreboard/:kind")]
    Scoreboard { kind: String },

    #[at("/admin")]
    Admin,
    #[at("/admin/events")]
    AdminEvents,
    #[at("/admin/events/add")]
    AdminAddEvent,
    #[at("/admin/events/:id")]
    AdminEvent { id: i64 },
    #[at("/admin/members")]
    AdminMembers,
    #[at("/admin/points")]
    AdminPoints,

    #[at("/superadmin")]
    Superadmin,
    #[at("/superadmin/sections")]
    SuperSections,
    #[at("/superadmin/sections/add")]
    SuperAddSection,
    #[at("/superadmin/sections/:id/edit")]
    SuperEditSection { id: i64 },
    #[at("/superadmin/semesters")]
    SuperSemesters,
    #[at("/superadmin/semesters/add")]
    SuperAddSemester,
    #[at("/superadmin/semesters/:id/edit")]
    SuperEditSemester { id: i64 },

    #[not_found]
    #[at("/404")]
    NotFound,
}

/* each guarded page sits inside its gate and the shared layout */

fn private(page: Html) -> Html {
    html! {
        <guard::PrivateRoute>
            <layout::MainLayout>{ page }</layout::MainLayout>
        </guard::PrivateRoute>
    }
}

fn admin_only(page: Html) -> Html {
    html! {
        <guard::AdminRoute>
            <layout::MainLayout>{ page }</layout::MainLayout>
        </guard::AdminRoute>
    }
}

fn superadmin_only(page: Html) -> Html {
    html! {
        <guard::SuperAdminRoute>
            <layout::MainLayout>{ page }</layout::MainLayout>
        </guard::SuperAdminRoute>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html!(<login::Login />),
        Route::Register => html!(<register::Registration />),
        Route::About => html!(<about::About />),

        Route::Home => private(html!(<home::HomePage />)),
        Route::MySections => private(html!(<my_sections::MySections />)),
        Route::Join => private(html!(<join::Join />)),
        Route::Profile => private(html!(<profile::Profile />)),
        Route::Activity => private(html!(<activity::Activity />)),
        Route::Scoreboards => private(html!(<scoreboard::ScoreboardList />)),
        Route::Scoreboard { kind } => private(html!(<scoreboard::Scoreboard {kind} />)),

        Route::Admin => admin_only(html!(<admin::AdminMenu />)),
        Route::AdminEvents => admin_only(html!(<admin::events::AllEvents />)),
        Route::AdminAddEvent => admin_only(html!(<admin::events::AddEvent />)),
        Route::AdminEvent { id } => admin_only(html!(<admin::events::EventDetail {id} />)),
        Route::AdminMembers => admin_only(html!(<admin::members::AllMembers />)),
        Route::AdminPoints => admin_only(html!(<admin::points::ManualPoints />)),

        Route::Superadmin => superadmin_only(html!(<superadmin::SuperadminMenu />)),
        Route::SuperSections => superadmin_only(html!(<superadmin::sections::AllSections />)),
        Route::SuperAddSection => {
            superadmin_only(html!(<superadmin::sections::SectionEditor id={None::<i64>} />))
        }
        Route::SuperEditSection { id } => {
            superadmin_only(html!(<superadmin::sections::SectionEditor id={Some(id)} />))
        }
        Route::SuperSemesters => superadmin_only(html!(<superadmin::semesters::AllSemesters />)),
        Route::SuperAddSemester => {
            superadmin_only(html!(<superadmin::semesters::SemesterEditor id={None::<i64>} />))
        }
        Route::SuperEditSemester { id } => {
            superadmin_only(html!(<superadmin::semesters::SemesterEditor id={Some(id)} />))
        }

        Route::NotFound => html!(<h1>{ "404 – Stranica ne postoji" }</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <session::SessionProvider>
            <section::SectionProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </section::SectionProvider>
        </session::SessionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
