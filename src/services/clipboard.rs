// ============================================================================
// CLIPBOARD SERVICE - Copy text to the system clipboard
// ============================================================================

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copies `text` to the system clipboard.
///
/// Prefers the async Clipboard API and falls back to the hidden-textarea
/// `execCommand("copy")` path when the API is rejected (older engines,
/// denied permission, insecure context).
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();

    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => Ok(()),
        Err(_) => {
            log::warn!("⚠️ [CLIPBOARD] Clipboard API rejected, trying execCommand fallback");
            copy_via_exec_command(text)
        }
    }
}

fn copy_via_exec_command(text: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|_| "could not create textarea")?
        .dyn_into()
        .map_err(|_| "textarea cast failed")?;
    textarea.set_value(text);
    // display:none would break select(); park it off-screen instead.
    let _ = textarea.set_attribute("style", "position:fixed;top:-1000px;opacity:0;");

    body.append_child(&textarea)
        .map_err(|_| "could not attach textarea")?;
    textarea.select();

    let html_doc: HtmlDocument = document
        .clone()
        .dyn_into()
        .map_err(|_| "not an HTML document")?;
    let copied = html_doc.exec_command("copy").unwrap_or(false);
    textarea.remove();

    if copied {
        Ok(())
    } else {
        Err("execCommand copy refused".to_string())
    }
}
