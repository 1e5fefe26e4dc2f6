// Pure navigation state machine. No DOM access here: rendering and history
// side effects live in the provider (hooks/use_router.rs).

use crate::router::route::{RouteMatch, RouteTable};

/// Where the router currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterState {
    /// No navigation has happened yet.
    Unresolved,
    /// A table entry is active.
    Resolved(RouteMatch),
    /// The last navigation matched nothing; a fallback view is shown.
    NotFound { path: String },
}

/// Resolves navigation events against the route table, one at a time.
pub struct RouterCore {
    table: RouteTable,
    state: RouterState,
}

impl RouterCore {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            state: RouterState::Unresolved,
        }
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Runs one transition for `path` and returns the new state. An
    /// unmatched path lands in `NotFound`; this never panics.
    pub fn navigate(&mut self, path: &str) -> RouterState {
        self.state = match self.table.resolve(path) {
            Some(matched) => RouterState::Resolved(matched),
            None => RouterState::NotFound {
                path: path.to_string(),
            },
        };
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::AppView;

    fn core() -> RouterCore {
        RouterCore::new(
            RouteTable::new()
                .route("/", AppView::Home)
                .route("/branch/:ifsc", AppView::BranchDetails),
        )
    }

    #[test]
    fn starts_unresolved() {
        assert_eq!(*core().state(), RouterState::Unresolved);
    }

    #[test]
    fn initial_navigation_resolves_home() {
        let mut router = core();
        match router.navigate("/") {
            RouterState::Resolved(matched) => assert_eq!(matched.view, AppView::Home),
            other => panic!("expected Resolved, got {:?}", other),
        }
    }

    #[test]
    fn unmatched_path_transitions_to_not_found() {
        let mut router = core();
        let state = router.navigate("/missing");
        assert_eq!(
            state,
            RouterState::NotFound {
                path: "/missing".to_string()
            }
        );
        // The router stays usable after a miss.
        match router.navigate("/branch/SBIN0000001") {
            RouterState::Resolved(matched) => {
                assert_eq!(matched.view, AppView::BranchDetails);
                assert_eq!(matched.params["ifsc"], "SBIN0000001");
            }
            other => panic!("expected Resolved, got {:?}", other),
        }
    }

    #[test]
    fn transitions_are_sequential_and_replace_state() {
        let mut router = core();
        router.navigate("/");
        router.navigate("/branch/A");
        let state = router.navigate("/branch/B");

        match state {
            RouterState::Resolved(matched) => assert_eq!(matched.params["ifsc"], "B"),
            other => panic!("expected Resolved, got {:?}", other),
        }

        let repeated = router.navigate("/branch/B");
        assert_eq!(*router.state(), repeated);
    }
}
