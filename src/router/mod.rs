// ============================================================================
// ROUTER - Route table -> view resolution with history navigation
// ============================================================================
// Pure resolution lives in `core`; DOM and history side effects live in
// `history` and in the RouterProvider hook.
// ============================================================================

pub mod core;
pub mod history;
pub mod route;

pub use self::core::{RouterCore, RouterState};
pub use self::route::{RouteMatch, RouteTable};

use std::cell::RefCell;
use std::rc::Rc;

/// Cheaply cloneable handle to the session's single `RouterCore`.
#[derive(Clone)]
pub struct SharedRouter {
    inner: Rc<RefCell<RouterCore>>,
}

impl SharedRouter {
    pub fn new(table: RouteTable) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RouterCore::new(table))),
        }
    }

    /// Runs one navigation transition and returns the new state. The borrow
    /// is scoped to the transition, so render side effects never overlap it.
    pub fn navigate(&self, path: &str) -> RouterState {
        self.inner.borrow_mut().navigate(path)
    }
}

impl PartialEq for SharedRouter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
