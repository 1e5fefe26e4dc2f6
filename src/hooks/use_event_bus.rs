// ============================================================================
// EVENT BUS CONTEXT - Share the one bus instance with the whole tree
// ============================================================================
// Uses the Yew Context API: the bus is constructed once at bootstrap and
// handed down here, never re-created.
// ============================================================================

use yew::prelude::*;

use crate::bus::EventBus;

#[derive(Properties, PartialEq)]
pub struct EventBusProviderProps {
    pub bus: EventBus,
    pub children: Children,
}

/// Makes the bootstrap-created bus reachable from every descendant.
#[function_component(EventBusProvider)]
pub fn event_bus_provider(props: &EventBusProviderProps) -> Html {
    html! {
        <ContextProvider<EventBus> context={props.bus.clone()}>
            {props.children.clone()}
        </ContextProvider<EventBus>>
    }
}

/// The process-wide event bus. Must run under `EventBusProvider`.
#[hook]
pub fn use_event_bus() -> EventBus {
    use_context::<EventBus>().expect("EventBusProvider is missing from the component tree")
}
