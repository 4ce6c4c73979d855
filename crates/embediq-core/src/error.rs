//! Error types for configuration and route table construction.
//!
//! Navigation itself has no error path: unmatched locations resolve to the
//! not-found page and tab/viewport inputs are closed enums. Errors only arise
//! while building the immutable tables at startup.

use thiserror::Error;

/// Route table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Literal route path does not start with `/`.
    #[error("route path must start with '/': {0:?}")]
    NotAbsolute(String),
    /// The same literal path is declared twice.
    #[error("duplicate route path: {0}")]
    Duplicate(String),
    /// No catch-all route was declared.
    #[error("route table has no wildcard route")]
    MissingWildcard,
    /// More than one catch-all route was declared.
    #[error("route table has more than one wildcard route")]
    MultipleWildcards,
    /// The catch-all route is followed by literal routes that could never be
    /// reached in priority order.
    #[error("wildcard route must be declared last")]
    WildcardNotLast,
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML document could not be parsed.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Navigation menu has no entries.
    #[error("navigation menu is empty")]
    EmptyNav,
    /// A navigation item has an empty label.
    #[error("navigation item for {0:?} has an empty label")]
    EmptyLabel(String),
    /// A navigation item points at a path no literal route serves.
    #[error("navigation item {label:?} points at unrouted path {path:?}")]
    UnroutedNavPath {
        /// Item label.
        label: String,
        /// Item path.
        path: String,
    },
    /// A footer link points at an in-app location no literal route serves.
    #[error("footer link {label:?} points at unrouted location {href:?}")]
    UnroutedFooterLink {
        /// Link label.
        label: String,
        /// Link href.
        href: String,
    },
    /// Breakpoint threshold of zero would classify every width as wide.
    #[error("breakpoint must be greater than zero")]
    ZeroBreakpoint,
    /// Route table rejected.
    #[error(transparent)]
    Routes(#[from] RouteTableError),
}
