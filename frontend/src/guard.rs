use yew::prelude::*;
use yew_router::prelude::*;

use rankup_core::{evaluate, AccessLevel, GuardOutcome};

use crate::section::{ensure_role, use_section};
use crate::session::use_session;
use crate::spinner::Spinner;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                               route guards                                 */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Re-evaluates the gate on every render and fires the role lookup when one
/// is owed. The decision itself lives in `rankup_core::guard`.
#[hook]
fn use_guard(level: AccessLevel) -> GuardOutcome {
    let session = use_session();
    let section = use_section();

    {
        let session = session.clone();
        let section = section.clone();
        use_effect(move || {
            ensure_role(&session, &section);
            || ()
        });
    }

    evaluate(level, session.store(), section.store())
}

fn render(outcome: GuardOutcome, children: &Children) -> Html {
    match outcome {
        GuardOutcome::Render => html! { for children.iter() },
        GuardOutcome::Loading => html!(<Spinner />),
        GuardOutcome::RedirectToLogin => html!(<Redirect<Route> to={Route::Login} />),
    }
}

/// Any authenticated user.
#[function_component(PrivateRoute)]
pub fn private_route(props: &GuardProps) -> Html {
    render(use_guard(AccessLevel::Authenticated), &props.children)
}

/// Section admins ("Kralj") only.
#[function_component(AdminRoute)]
pub fn admin_route(props: &GuardProps) -> Html {
    render(use_guard(AccessLevel::Admin), &props.children)
}

/// Section superadmins only.
#[function_component(SuperAdminRoute)]
pub fn super_admin_route(props: &GuardProps) -> Html {
    render(use_guard(AccessLevel::Superadmin), &props.children)
}
