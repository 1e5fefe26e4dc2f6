use serde_json::json;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_event_bus, use_router};

/// Landing view: the IFSC search box. Submitting navigates to the branch
/// details route; empty input is reported over the bus instead of routed.
#[function_component(Home)]
pub fn home() -> Html {
    let input_ref = use_node_ref();
    let router = use_router();
    let bus = use_event_bus();

    let submit = {
        let input_ref = input_ref.clone();
        Callback::from(move |()| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let code = input.value().trim().to_uppercase();
            if code.is_empty() {
                bus.publish(
                    "notice",
                    json!({ "kind": "error", "message": "Enter an IFSC code first" }),
                );
                return;
            }
            log::info!("🔍 [HOME] Looking up branch {}", code);
            router.navigate(format!("/branch/{}", code));
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let onkeydown = Callback::from(move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            submit.emit(());
        }
    });

    html! {
        <div class="home">
            <h2>{"Find a bank branch"}</h2>
            <p>{"Enter an IFSC code to look up the branch details."}</p>
            <div class="search-box">
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="e.g. SBIN0000001"
                    {onkeydown}
                />
                <button {onclick}>{"Search"}</button>
            </div>
        </div>
    }
}
