pub mod use_event_bus;
pub mod use_router;

pub use use_event_bus::{use_event_bus, EventBusProvider};
pub use use_router::{use_router, RouterHandle, RouterProvider};
