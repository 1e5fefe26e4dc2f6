use std::cell::Cell;

use gloo_timers::callback::Timeout;
use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_event_bus;

const DISMISS_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
struct Notice {
    kind: String,
    message: String,
    // Distinguishes repeated identical messages so the dismiss timer resets.
    seq: u64,
}

/// Transient notification banner. Listens for "notice" events on the bus;
/// sibling components publish to it without referencing the toast at all.
#[function_component(Toast)]
pub fn toast() -> Html {
    let bus = use_event_bus();
    let notice = use_state(|| None::<Notice>);

    {
        let bus = bus.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            let seq = Cell::new(0u64);
            let token = bus.subscribe("notice", {
                let notice = notice.clone();
                move |payload: &Value| {
                    let message = payload
                        .get("message")
                        .and_then(Value::as_str)
                        .ok_or("notice payload has no message")?
                        .to_string();
                    let kind = payload
                        .get("kind")
                        .and_then(Value::as_str)
                        .unwrap_or("info")
                        .to_string();
                    seq.set(seq.get() + 1);
                    notice.set(Some(Notice {
                        kind,
                        message,
                        seq: seq.get(),
                    }));
                    Ok(())
                }
            });

            // Unsubscribe when the toast leaves the tree.
            move || bus.unsubscribe(&token)
        });
    }

    // Auto-dismiss; dropping the old timeout cancels it when a newer notice
    // arrives before it fires.
    {
        let notice_handle = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timer = current
                .as_ref()
                .map(|_| Timeout::new(DISMISS_MS, move || notice_handle.set(None)));
            move || drop(timer)
        });
    }

    match &*notice {
        Some(n) => html! {
            <div class={classes!("toast", n.kind.clone())}>{ &n.message }</div>
        },
        None => html! {},
    }
}
