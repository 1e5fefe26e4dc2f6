// Application route table. Declaration order is authoritative when patterns
// overlap, so keep the most specific entries first.

use crate::router::RouteTable;

/// Views the router can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Home,
    BranchDetails,
}

/// Builds the route table used for the whole session.
pub fn route_table() -> RouteTable {
    RouteTable::new()
        .route("/", AppView::Home)
        .route("/branch/:ifsc", AppView::BranchDetails)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_path_resolves_to_its_view() {
        let table = route_table();

        assert_eq!(table.resolve("/").expect("root").view, AppView::Home);
        assert_eq!(
            table.resolve("/branch/ICIC0000001").expect("details").view,
            AppView::BranchDetails
        );
        assert!(table.resolve("/missing").is_none());
    }
}
