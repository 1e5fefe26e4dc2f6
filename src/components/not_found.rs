use yew::prelude::*;

use super::RouterLink;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub path: String,
}

/// Fallback for unmatched routes. A miss always renders something; it never
/// crashes the application.
#[function_component(NotFoundView)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found">
            <h2>{"Page not found"}</h2>
            <p>{format!("Nothing is routed at {}", props.path)}</p>
            <RouterLink to="/">{"Go to the search page"}</RouterLink>
        </div>
    }
}
