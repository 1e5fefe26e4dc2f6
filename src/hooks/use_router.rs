// ============================================================================
// ROUTER CONTEXT - Live router state + navigation for the component tree
// ============================================================================
// The provider owns every transition source: the initial location, the
// popstate listener, and programmatic navigation. Views only consume the
// resulting state through use_router().
// ============================================================================

use yew::prelude::*;

use crate::router::{history, RouterState, SharedRouter};
use crate::services::analytics;

/// Navigation handle exposed to components.
#[derive(Clone, PartialEq)]
pub struct RouterHandle {
    pub state: RouterState,
    push: Callback<String>,
}

impl RouterHandle {
    /// Programmatic navigation: pushes a history entry and re-resolves.
    pub fn navigate(&self, path: impl Into<String>) {
        self.push.emit(path.into());
    }
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    pub router: SharedRouter,
    pub children: Children,
}

#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    // Initial load resolves the current browser location.
    let state = {
        let router = props.router.clone();
        use_state(move || router.navigate(&history::current_path()))
    };

    // Back/forward re-runs resolution instead of reloading the application.
    // Registered once; the Closure behind on_popstate is kept alive for the
    // whole session.
    {
        let router = props.router.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            analytics::track_page_view(&history::current_path());

            let listener = history::on_popstate({
                let router = router.clone();
                let state = state.clone();
                move || {
                    let path = history::current_path();
                    log::info!("🧭 [ROUTER] popstate -> {}", path);
                    let next = router.navigate(&path);
                    analytics::track_page_view(&path);
                    state.set(next);
                }
            });
            if let Err(err) = listener {
                log::error!("❌ [ROUTER] {}", err);
            }
            || ()
        });
    }

    let push = {
        let router = props.router.clone();
        let state = state.clone();
        use_callback((), move |path: String, _| {
            log::info!("🧭 [ROUTER] navigate -> {}", path);
            if let Err(err) = history::push_path(&path) {
                log::error!("❌ [ROUTER] {}", err);
            }
            let next = router.navigate(&path);
            analytics::track_page_view(&path);
            state.set(next);
        })
    };

    let handle = RouterHandle {
        state: (*state).clone(),
        push,
    };

    html! {
        <ContextProvider<RouterHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RouterHandle>>
    }
}

/// The live router handle. Must run under `RouterProvider`.
#[hook]
pub fn use_router() -> RouterHandle {
    use_context::<RouterHandle>().expect("RouterProvider is missing from the component tree")
}
