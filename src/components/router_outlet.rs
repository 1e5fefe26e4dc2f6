use yew::prelude::*;

use crate::hooks::use_router;
use crate::router::RouterState;
use crate::routes::AppView;

use super::{BranchDetails, Home, NotFoundView};

/// Renders the view the router resolved for the current location. This is
/// the render half of a transition; the state half lives in RouterCore.
#[function_component(RouterOutlet)]
pub fn router_outlet() -> Html {
    let router = use_router();

    match &router.state {
        RouterState::Unresolved => html! {},
        RouterState::Resolved(matched) => match matched.view {
            AppView::Home => html! { <Home /> },
            AppView::BranchDetails => {
                let ifsc = matched.params.get("ifsc").cloned().unwrap_or_default();
                html! { <BranchDetails {ifsc} /> }
            }
        },
        RouterState::NotFound { path } => html! { <NotFoundView path={path.clone()} /> },
    }
}
