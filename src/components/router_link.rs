use yew::prelude::*;

use crate::hooks::use_router;

#[derive(Properties, PartialEq)]
pub struct RouterLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that routes through the history API instead of reloading the page.
#[function_component(RouterLink)]
pub fn router_link(props: &RouterLinkProps) -> Html {
    let router = use_router();

    let onclick = {
        let to = props.to.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            router.navigate(to.to_string());
        })
    };

    html! {
        <a href={props.to.clone()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
