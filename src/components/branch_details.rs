use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_event_bus;
use crate::services::clipboard;

use super::RouterLink;

#[derive(Properties, PartialEq)]
pub struct BranchDetailsProps {
    pub ifsc: String,
}

/// Details view for the `/branch/:ifsc` route. The copy action reports its
/// outcome over the bus; the toast picks it up without any direct wiring.
#[function_component(BranchDetails)]
pub fn branch_details(props: &BranchDetailsProps) -> Html {
    let bus = use_event_bus();

    let on_copy = {
        let bus = bus.clone();
        let ifsc = props.ifsc.clone();
        Callback::from(move |_: MouseEvent| {
            let bus = bus.clone();
            let ifsc = ifsc.clone();
            spawn_local(async move {
                match clipboard::copy_text(&ifsc).await {
                    Ok(()) => {
                        log::info!("📋 [DETAILS] Copied {}", ifsc);
                        bus.publish(
                            "notice",
                            json!({
                                "kind": "success",
                                "message": format!("{} copied to clipboard", ifsc)
                            }),
                        );
                    }
                    Err(err) => {
                        log::error!("❌ [DETAILS] Copy failed: {}", err);
                        bus.publish(
                            "notice",
                            json!({ "kind": "error", "message": "Could not copy to clipboard" }),
                        );
                    }
                }
            });
        })
    };

    html! {
        <div class="branch-details">
            <h2>{"Branch"}</h2>
            <div class="ifsc-row">
                <code>{&props.ifsc}</code>
                <button onclick={on_copy}>{"📋 Copy IFSC"}</button>
            </div>
            <RouterLink to="/">{"← Back to search"}</RouterLink>
        </div>
    }
}
