// ============================================================================
// ANALYTICS SERVICE - Optional gtag integration
// ============================================================================
// Installed at bootstrap only when the configuration carries a measurement
// id. Page views are reported per router transition, not by the snippet.
// ============================================================================

use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};

/// Injects the gtag loader and bootstraps the data layer for
/// `measurement_id`.
pub fn install(measurement_id: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let head = document.head().ok_or("no <head> element")?;

    let script = document
        .create_element("script")
        .map_err(|_| "could not create script element")?;
    let _ = script.set_attribute("async", "");
    script
        .set_attribute(
            "src",
            &format!("https://www.googletagmanager.com/gtag/js?id={}", measurement_id),
        )
        .map_err(|_| "could not set script src")?;
    head.append_child(&script)
        .map_err(|_| "could not attach gtag script")?;

    let bootstrap = format!(
        "window.dataLayer = window.dataLayer || [];\n\
         window.gtag = function() {{ dataLayer.push(arguments); }};\n\
         gtag('js', new Date());\n\
         gtag('config', '{}', {{ send_page_view: false }});",
        measurement_id
    );
    js_sys::eval(&bootstrap).map_err(|_| "gtag bootstrap failed")?;

    log::info!("📈 [ANALYTICS] gtag installed for {}", measurement_id);
    Ok(())
}

/// Reports a page view for `path`. Fire-and-forget: a no-op unless
/// `install` ran, and a failed call never reaches the router.
pub fn track_page_view(path: &str) {
    let Some(window) = web_sys::window() else { return };
    let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() else { return };

    let params = serde_wasm_bindgen::to_value(&json!({ "page_path": path }))
        .unwrap_or(JsValue::UNDEFINED);
    if gtag
        .call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str("event"),
            &JsValue::from_str("page_view"),
            &params,
        )
        .is_err()
    {
        log::warn!("⚠️ [ANALYTICS] page_view call failed for {}", path);
    }
}
