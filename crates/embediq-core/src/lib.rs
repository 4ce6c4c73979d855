//! Navigation and view-composition logic for the EmbedIQ web shell.
//!
//! Everything in this crate is target-independent and free of browser
//! bindings, so it can be tested natively. The Leptos application drives
//! these types from DOM events.
//!
//! - [`route`] - Route table, page identifiers, hash locations
//! - [`nav`] - Ordered navigation destinations
//! - [`viewport`] - Breakpoint classification (compact / wide)
//! - [`drawer`] - Responsive navigation controller state machine
//! - [`tabs`] - Fixed-panel tab selector
//! - [`api`] - Contract types of the documented retrieval API
//! - [`config`] - Site configuration loaded from TOML

pub mod api;
pub mod config;
pub mod drawer;
pub mod error;
pub mod nav;
pub mod route;
pub mod tabs;
pub mod viewport;

pub use config::{FooterLink, SiteConfig};
pub use drawer::{DrawerState, NavDrawer, NavEvent};
pub use error::{ConfigError, RouteTableError};
pub use nav::{NavItem, NavMenu};
pub use route::{PageId, Route, RoutePattern, RouteTable};
pub use tabs::{DocsTab, TabSelector, TabSet};
pub use viewport::{Breakpoint, ViewportClass};
