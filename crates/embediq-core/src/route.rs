//! Route table and hash-based locations.
//!
//! URL format: `#/path` (e.g., `#/`, `#/query`, `#/docs`). The hash is the
//! source of truth for the current location; [`path_from_hash`] turns it into
//! a path and [`RouteTable::resolve`] maps the path to exactly one [`PageId`].

use std::collections::HashSet;

use crate::error::RouteTableError;

// ============================================================================
// Page identifiers
// ============================================================================

/// Top-level page views. Only one is rendered at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Landing page: `/`
    Home,
    /// Query interface entry point: `/query`
    Query,
    /// API reference: `/docs`
    Docs,
    /// Fallback for every unmatched location
    NotFound,
}

impl PageId {
    /// Document title suffix for this page.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Query => "Query",
            Self::Docs => "API Documentation",
            Self::NotFound => "Page Not Found",
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Location pattern of a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches the path exactly, nothing else.
    Exact(String),
    /// Catch-all, matches any path.
    Wildcard,
}

/// Association between a location pattern and the page it renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: PageId,
}

impl Route {
    pub fn exact(path: impl Into<String>, page: PageId) -> Self {
        Self {
            pattern: RoutePattern::Exact(path.into()),
            page,
        }
    }

    pub fn wildcard(page: PageId) -> Self {
        Self {
            pattern: RoutePattern::Wildcard,
            page,
        }
    }

    fn matches(&self, path: &str) -> bool {
        match &self.pattern {
            RoutePattern::Exact(p) => p == path,
            RoutePattern::Wildcard => true,
        }
    }
}

// ============================================================================
// RouteTable
// ============================================================================

/// Ordered, validated route table.
///
/// Construction guarantees exactly one wildcard, declared last, so that
/// [`resolve`](Self::resolve) is total: for any input exactly one route
/// matches, and the wildcard matches iff no literal route does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from routes in priority order.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        let mut wildcard_at = None;

        for (i, route) in routes.iter().enumerate() {
            match &route.pattern {
                RoutePattern::Exact(path) => {
                    if wildcard_at.is_some() {
                        return Err(RouteTableError::WildcardNotLast);
                    }
                    if !path.starts_with('/') {
                        return Err(RouteTableError::NotAbsolute(path.clone()));
                    }
                    if !seen.insert(path.as_str()) {
                        return Err(RouteTableError::Duplicate(path.clone()));
                    }
                }
                RoutePattern::Wildcard => {
                    if wildcard_at.is_some() {
                        return Err(RouteTableError::MultipleWildcards);
                    }
                    wildcard_at = Some(i);
                }
            }
        }

        if wildcard_at.is_none() {
            return Err(RouteTableError::MissingWildcard);
        }

        Ok(Self { routes })
    }

    /// The application's routes in priority order:
    /// - `/` → Home
    /// - `/query` → Query
    /// - `/docs` → Docs
    /// - `*` → NotFound
    pub fn standard_routes() -> Vec<Route> {
        vec![
            Route::exact("/", PageId::Home),
            Route::exact("/query", PageId::Query),
            Route::exact("/docs", PageId::Docs),
            Route::wildcard(PageId::NotFound),
        ]
    }

    /// Table over [`standard_routes`](Self::standard_routes), which are known
    /// to pass validation.
    pub fn standard() -> Self {
        Self {
            routes: Self::standard_routes(),
        }
    }

    /// Resolve a location path to the page that should be rendered.
    ///
    /// Exact matching only: `/docs/` and `/docs/ingest` fall through to the
    /// wildcard just like any other unknown path.
    pub fn resolve(&self, path: &str) -> PageId {
        let route = self.routes.iter().find(|r| r.matches(path));
        match route {
            Some(Route {
                pattern: RoutePattern::Wildcard,
                page,
            }) => {
                log::debug!("no route for {:?}, falling back to {:?}", path, page);
                *page
            }
            Some(route) => route.page,
            // Unreachable after validation; NotFound keeps resolve total.
            None => PageId::NotFound,
        }
    }

    /// Whether `path` is served by a literal (non-wildcard) route.
    pub fn is_routed(&self, path: &str) -> bool {
        self.routes
            .iter()
            .any(|r| matches!(&r.pattern, RoutePattern::Exact(p) if p == path))
    }

    /// Routes in priority order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Hash locations
// ============================================================================

/// Parse a URL hash into a location path.
///
/// `""`, `"#"` and `"#/"` all map to `/`. A `?query` suffix is dropped and a
/// leading `/` is always present.
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.trim_start_matches('#');
    let raw = raw.split_once('?').map_or(raw, |(path, _)| path);

    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    }
}

/// Convert a location path into the hash used in link targets.
pub fn hash_for(path: &str) -> String {
    if path.starts_with('/') {
        format!("#{}", path)
    } else {
        format!("#/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_routes() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/"), PageId::Home);
        assert_eq!(table.resolve("/query"), PageId::Query);
        assert_eq!(table.resolve("/docs"), PageId::Docs);
    }

    #[test]
    fn test_unmatched_paths_fall_through() {
        let table = RouteTable::standard();
        for path in [
            "/unknown-page",
            "/docs/",
            "/docs/ingest",
            "/Docs",
            "",
            "docs",
            "//",
            "/query?x=1",
            "/\u{0}",
        ] {
            assert_eq!(table.resolve(path), PageId::NotFound, "path {:?}", path);
        }
    }

    #[test]
    fn test_resolution_is_history_independent() {
        let table = RouteTable::standard();
        let visits = ["/docs", "/nope", "/", "/query", "/docs", "/x/y"];
        let first: Vec<_> = visits.iter().map(|p| table.resolve(p)).collect();
        let second: Vec<_> = visits.iter().rev().map(|p| table.resolve(p)).collect();
        assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());
        assert_eq!(table.resolve("/docs"), PageId::Docs);
    }

    #[test]
    fn test_priority_order() {
        let table = RouteTable::new(vec![
            Route::exact("/a", PageId::Docs),
            Route::exact("/b", PageId::Query),
            Route::wildcard(PageId::Home),
        ])
        .unwrap();
        assert_eq!(table.resolve("/a"), PageId::Docs);
        assert_eq!(table.resolve("/b"), PageId::Query);
        assert_eq!(table.resolve("/c"), PageId::Home);
    }

    #[test]
    fn test_table_validation() {
        assert_eq!(
            RouteTable::new(vec![Route::exact("/", PageId::Home)]),
            Err(RouteTableError::MissingWildcard)
        );
        assert_eq!(
            RouteTable::new(vec![
                Route::wildcard(PageId::NotFound),
                Route::wildcard(PageId::NotFound),
            ]),
            Err(RouteTableError::MultipleWildcards)
        );
        assert_eq!(
            RouteTable::new(vec![
                Route::wildcard(PageId::NotFound),
                Route::exact("/", PageId::Home),
            ]),
            Err(RouteTableError::WildcardNotLast)
        );
        assert_eq!(
            RouteTable::new(vec![
                Route::exact("/docs", PageId::Docs),
                Route::exact("/docs", PageId::Query),
                Route::wildcard(PageId::NotFound),
            ]),
            Err(RouteTableError::Duplicate("/docs".to_string()))
        );
        assert_eq!(
            RouteTable::new(vec![
                Route::exact("docs", PageId::Docs),
                Route::wildcard(PageId::NotFound),
            ]),
            Err(RouteTableError::NotAbsolute("docs".to_string()))
        );
    }

    #[test]
    fn test_standard_table_is_valid() {
        let rebuilt = RouteTable::new(RouteTable::standard_routes());
        assert_eq!(rebuilt, Ok(RouteTable::standard()));
    }

    #[test]
    fn test_is_routed() {
        let table = RouteTable::standard();
        assert!(table.is_routed("/"));
        assert!(table.is_routed("/docs"));
        assert!(!table.is_routed("/missing"));
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/docs"), "/docs");
        assert_eq!(path_from_hash("#docs"), "/docs");
        assert_eq!(path_from_hash("#/query?q=rust"), "/query");
        assert_eq!(path_from_hash("#/docs/"), "/docs/");
    }

    #[test]
    fn test_hash_for() {
        assert_eq!(hash_for("/"), "#/");
        assert_eq!(hash_for("/docs"), "#/docs");
        assert_eq!(hash_for("query"), "#/query");
    }
}
