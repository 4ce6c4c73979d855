//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and page dispatch (main entry point)
//! - [`layout`] - Persistent shell: header, navigation drawer, footer
//! - [`pages`] - Page views rendered in the layout's content slot
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;

pub use router::{AppRouter, RouteContext};
