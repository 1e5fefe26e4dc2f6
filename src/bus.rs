// ============================================================================
// EVENT BUS - Cross-component publish/subscribe
// ============================================================================
// One instance is created at bootstrap and handed to the component tree via
// EventBusProvider. Cloning the handle shares the same underlying bus, so
// every component talks to the same subscriber lists.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

/// Payload attached to every published event.
pub type EventPayload = Value;

type Handler = dyn Fn(&EventPayload) -> Result<(), String>;

/// Handle returned by `subscribe`, used to remove the handler later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionToken {
    event: String,
    id: u64,
}

struct Subscriber {
    id: u64,
    handler: Rc<Handler>,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    channels: HashMap<String, Vec<Subscriber>>,
}

/// Process-wide publish/subscribe bus.
///
/// Handlers for an event name run synchronously in registration order. The
/// subscriber list is snapshotted at the start of each `publish`, so handlers
/// added or removed during dispatch take effect from the next publish on.
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner::default())),
        }
    }

    /// Registers `handler` for `event`. Event names must be non-empty.
    pub fn subscribe<F>(&self, event: &str, handler: F) -> SubscriptionToken
    where
        F: Fn(&EventPayload) -> Result<(), String> + 'static,
    {
        debug_assert!(!event.is_empty(), "event names must be non-empty");

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.channels.entry(event.to_string()).or_default().push(Subscriber {
            id,
            handler: Rc::new(handler),
        });

        SubscriptionToken {
            event: event.to_string(),
            id,
        }
    }

    /// Invokes every handler registered for `event`, in registration order.
    ///
    /// A handler error is logged and does not stop dispatch or reach the
    /// publisher. Publishing on an event nobody listens to is a no-op. No
    /// borrow is held while handlers run, so handlers may publish, subscribe,
    /// and unsubscribe re-entrantly.
    pub fn publish(&self, event: &str, payload: EventPayload) {
        let handlers: Vec<Rc<Handler>> = match self.inner.borrow().channels.get(event) {
            Some(subs) => subs.iter().map(|s| s.handler.clone()).collect(),
            None => return,
        };

        for handler in handlers {
            if let Err(err) = handler(&payload) {
                log::error!("❌ [BUS] Handler for '{}' failed: {}", event, err);
            }
        }
    }

    /// Removes the handler identified by `token`. Unknown or already-removed
    /// tokens are a no-op.
    pub fn unsubscribe(&self, token: &SubscriptionToken) {
        let mut inner = self.inner.borrow_mut();
        if let Some(subs) = inner.channels.get_mut(&token.event) {
            subs.retain(|s| s.id != token.id);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("ptr", &Rc::as_ptr(&self.inner))
            .finish()
    }
}

// Identity comparison: two handles are equal when they share the same bus.
// Required for the Yew context plumbing.
impl PartialEq for EventBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn handlers_run_in_subscription_order_with_payload() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["h1", "h2", "h3"] {
            let seen = seen.clone();
            bus.subscribe("ping", move |payload| {
                seen.borrow_mut().push((tag, payload.clone()));
                Ok(())
            });
        }

        bus.publish("ping", json!(42));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen.iter().map(|(tag, _)| *tag).collect::<Vec<_>>(),
            vec!["h1", "h2", "h3"]
        );
        assert!(seen.iter().all(|(_, payload)| payload == &json!(42)));
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new();
        bus.publish("nobody-listens", json!(null));
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let bus = EventBus::new();
        let calls = Rc::new(RefCell::new(0));

        let token = {
            let calls = calls.clone();
            bus.subscribe("ping", move |_| {
                *calls.borrow_mut() += 1;
                Ok(())
            })
        };

        bus.publish("ping", json!(null));
        bus.unsubscribe(&token);
        bus.unsubscribe(&token);
        bus.publish("ping", json!(null));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn failing_handler_does_not_stop_dispatch() {
        let bus = EventBus::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        {
            let calls = calls.clone();
            bus.subscribe("ping", move |_| {
                calls.borrow_mut().push("bad");
                Err("boom".to_string())
            });
        }
        {
            let calls = calls.clone();
            bus.subscribe("ping", move |_| {
                calls.borrow_mut().push("good");
                Ok(())
            });
        }

        bus.publish("ping", json!(null));

        assert_eq!(*calls.borrow(), vec!["bad", "good"]);
    }

    #[test]
    fn handlers_may_publish_re_entrantly() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        {
            let order = order.clone();
            let inner_bus = bus.clone();
            bus.subscribe("outer", move |_| {
                order.borrow_mut().push("outer");
                inner_bus.publish("inner", json!("nested"));
                Ok(())
            });
        }
        {
            let order = order.clone();
            bus.subscribe("inner", move |payload| {
                assert_eq!(payload, &json!("nested"));
                order.borrow_mut().push("inner");
                Ok(())
            });
        }

        bus.publish("outer", json!(null));

        assert_eq!(*order.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn subscription_during_publish_takes_effect_next_publish() {
        let bus = EventBus::new();
        let late_calls = Rc::new(RefCell::new(0));

        {
            let bus_handle = bus.clone();
            let late_calls = late_calls.clone();
            bus.subscribe("ping", move |_| {
                let late_calls = late_calls.clone();
                bus_handle.subscribe("ping", move |_| {
                    *late_calls.borrow_mut() += 1;
                    Ok(())
                });
                Ok(())
            });
        }

        bus.publish("ping", json!(null));
        assert_eq!(*late_calls.borrow(), 0);

        bus.publish("ping", json!(null));
        assert_eq!(*late_calls.borrow(), 1);
    }

    #[test]
    fn cloned_handles_share_one_bus() {
        let bus = EventBus::new();
        let component_a = bus.clone();
        let component_b = bus.clone();
        assert_eq!(component_a, component_b);

        let calls = Rc::new(RefCell::new(Vec::new()));
        {
            let calls = calls.clone();
            component_a.subscribe("ping", move |payload| {
                calls.borrow_mut().push(payload.clone());
                Ok(())
            });
        }

        component_b.publish("ping", json!(42));

        assert_eq!(*calls.borrow(), vec![json!(42)]);
    }
}
