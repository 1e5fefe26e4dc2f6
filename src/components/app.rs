use yew::prelude::*;

use crate::bus::EventBus;
use crate::hooks::{EventBusProvider, RouterProvider};
use crate::router::SharedRouter;

use super::{RouterLink, RouterOutlet, Toast};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub bus: EventBus,
    pub router: SharedRouter,
}

/// Root view: installs the ambient contexts and lays out the shell around
/// the router outlet. The toast is a sibling of the routed views and only
/// talks to them over the bus.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <EventBusProvider bus={props.bus.clone()}>
            <RouterProvider router={props.router.clone()}>
                <header class="app-header">
                    <RouterLink to="/" class="brand">{"🏦 Branch Finder"}</RouterLink>
                </header>
                <main class="app-main">
                    <RouterOutlet />
                </main>
                <Toast />
            </RouterProvider>
        </EventBusProvider>
    }
}
