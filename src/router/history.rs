// Browser history binding: the only place the router touches the host
// navigation primitives.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Current pathname, `/` when the location is unavailable.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Pushes a history entry so the address bar follows the active route.
pub fn push_path(path: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let history = window.history().map_err(|_| "history API unavailable")?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|_| format!("pushState failed for '{}'", path))
}

/// Registers `callback` for back/forward navigation.
///
/// The closure is leaked deliberately: the router provider registers exactly
/// once per application session, so nothing accumulates.
pub fn on_popstate<F>(callback: F) -> Result<(), String>
where
    F: Fn() + 'static,
{
    let window = web_sys::window().ok_or("no window")?;
    let closure =
        Closure::wrap(Box::new(move |_event: web_sys::Event| callback()) as Box<dyn FnMut(web_sys::Event)>);
    window
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        .map_err(|_| "failed to attach popstate listener".to_string())?;
    closure.forget();
    Ok(())
}
