// ============================================================================
// BRANCH FINDER - Yew/WASM frontend bootstrap
// ============================================================================
// Composition of the app shell:
// - bus: cross-component publish/subscribe
// - router: route table -> view resolution, history navigation
// - components: Yew views around the router outlet
// - services: clipboard and analytics integrations
// - config: compile-time environment configuration
// ============================================================================

mod bus;
mod components;
mod config;
mod hooks;
mod router;
mod routes;
mod services;

use wasm_bindgen::prelude::*;

use crate::bus::EventBus;
use crate::components::app::AppProps;
use crate::components::App;
use crate::config::CONFIG;
use crate::router::SharedRouter;

const MOUNT_ID: &str = "app";

/// Application bootstrap. Runs once per session when the wasm module loads;
/// the step order below is load-bearing.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // 1. Startup diagnostics are gated by configuration: quiet builds only
    //    surface warnings.
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    } else {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Warn));
    }
    log::info!("🚀 Branch Finder starting ({})", CONFIG.environment);

    // 2. The one event bus for this session; the root view installs the
    //    context provider that makes it reachable everywhere.
    let bus = EventBus::new();

    // 3. Router over the static route table, history mode.
    let table = routes::route_table();
    log::info!("🗺️ [ROUTER] {} routes registered", table.len());
    let router = SharedRouter::new(table);

    // 4. Optional integrations: analytics only runs with an id configured.
    match CONFIG.analytics_id() {
        Some(id) => {
            if let Err(err) = services::analytics::install(id) {
                log::error!("❌ [ANALYTICS] Install failed: {}", err);
            }
        }
        None => log::info!("📈 [ANALYTICS] No measurement id configured, skipping"),
    }

    // 5. Mount the root view.
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let root = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| JsValue::from_str("No #app element found"))?;

    yew::Renderer::<App>::with_root_and_props(root, AppProps { bus, router }).render();

    Ok(())
}
