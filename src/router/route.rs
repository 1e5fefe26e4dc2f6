// ============================================================================
// ROUTE TABLE - Ordered path-pattern -> view bindings
// ============================================================================

use std::collections::HashMap;

use crate::routes::AppView;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard,
}

/// A parsed path pattern: static segments, `:param` captures, and an
/// optional trailing `*` that swallows any remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .into_iter()
            .map(|seg| {
                if seg == "*" {
                    Segment::Wildcard
                } else if let Some(name) = seg.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else {
                    Segment::Literal(seg.to_string())
                }
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// Matches `path` against this pattern, returning captured params.
    fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts = split_segments(path);
        let mut params = HashMap::new();

        let mut i = 0;
        for segment in &self.segments {
            match segment {
                Segment::Wildcard => return Some(params),
                Segment::Literal(lit) => {
                    if parts.get(i).copied() != Some(lit.as_str()) {
                        return None;
                    }
                    i += 1;
                }
                Segment::Param(name) => {
                    let value = *parts.get(i)?;
                    params.insert(name.clone(), value.to_string());
                    i += 1;
                }
            }
        }

        if i == parts.len() {
            Some(params)
        } else {
            None
        }
    }
}

/// Splits a path into segments, ignoring query/hash suffixes and trailing
/// slashes. `/` has no segments.
fn split_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect()
}

#[derive(Debug, Clone, PartialEq)]
struct Route {
    pattern: RoutePattern,
    view: AppView,
}

/// A successful resolution: which view to show and what the path captured.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub view: AppView,
    /// The pattern as declared in the table.
    pub pattern: String,
    /// The concrete path that was resolved.
    pub path: String,
    pub params: HashMap<String, String>,
}

/// Ordered, immutable-after-load collection of routes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a binding. Declaration order decides between overlapping
    /// patterns (first match wins); a duplicate path keeps the first
    /// registration.
    pub fn route(mut self, pattern: &str, view: AppView) -> Self {
        if self.routes.iter().any(|r| r.pattern.raw == pattern) {
            log::warn!("⚠️ [ROUTER] Duplicate route '{}' ignored", pattern);
            return self;
        }
        self.routes.push(Route {
            pattern: RoutePattern::parse(pattern),
            view,
        });
        self
    }

    /// Resolves `path` against the table; the first declared match wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| RouteMatch {
                view: route.view,
                pattern: route.pattern.raw.clone(),
                path: path.to_string(),
                params,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new()
            .route("/", AppView::Home)
            .route("/branch/:ifsc", AppView::BranchDetails)
    }

    #[test]
    fn static_root_resolves() {
        let matched = table().resolve("/").expect("root should match");
        assert_eq!(matched.view, AppView::Home);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn param_segment_captures_value() {
        let matched = table().resolve("/branch/SBIN0000001").expect("should match");
        assert_eq!(matched.view, AppView::BranchDetails);
        assert_eq!(matched.params.get("ifsc").map(String::as_str), Some("SBIN0000001"));
        assert_eq!(matched.pattern, "/branch/:ifsc");
        assert_eq!(matched.path, "/branch/SBIN0000001");
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(table().resolve("/missing").is_none());
        assert!(table().resolve("/branch").is_none());
        assert!(table().resolve("/branch/X/extra").is_none());
    }

    #[test]
    fn first_declared_wins_for_overlapping_patterns() {
        let overlapping = RouteTable::new()
            .route("/branch/new", AppView::Home)
            .route("/branch/:ifsc", AppView::BranchDetails);

        let matched = overlapping.resolve("/branch/new").expect("should match");
        assert_eq!(matched.view, AppView::Home);

        let matched = overlapping.resolve("/branch/HDFC0000001").expect("should match");
        assert_eq!(matched.view, AppView::BranchDetails);
    }

    #[test]
    fn duplicate_registration_keeps_the_first() {
        let dup = RouteTable::new()
            .route("/", AppView::Home)
            .route("/", AppView::BranchDetails);

        assert_eq!(dup.len(), 1);
        assert_eq!(dup.resolve("/").expect("should match").view, AppView::Home);
    }

    #[test]
    fn trailing_slash_query_and_hash_are_ignored() {
        let t = table();
        assert_eq!(t.resolve("/branch/X/").expect("match").params["ifsc"], "X");
        assert_eq!(t.resolve("/branch/X?from=search").expect("match").params["ifsc"], "X");
        assert_eq!(t.resolve("/?utm=1#top").expect("match").view, AppView::Home);
    }

    #[test]
    fn trailing_wildcard_matches_any_remainder() {
        let t = RouteTable::new()
            .route("/help/*", AppView::Home)
            .route("/branch/:ifsc", AppView::BranchDetails);

        assert_eq!(t.resolve("/help/faq/routing").expect("match").view, AppView::Home);
        assert_eq!(t.resolve("/help").expect("match").view, AppView::Home);
        assert!(t.resolve("/other").is_none());
    }
}
