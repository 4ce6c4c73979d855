//! Application configuration.
//!
//! Centralizes the compile-time constants of the web shell. Site content
//! (brand, nav items, API base URL, breakpoint) lives in `assets/site.toml`
//! and is parsed into an [`embediq_core::SiteConfig`] at startup.

use log::LevelFilter;

// =============================================================================
// Site Assets (loaded at compile time)
// =============================================================================

/// Site configuration document.
pub const SITE_CONFIG: &str = include_str!("../assets/site.toml");

// =============================================================================
// Mounting
// =============================================================================

/// Id of the element the application is mounted into.
pub const ROOT_ELEMENT_ID: &str = "app";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// Query Page
// =============================================================================

/// Upper bound offered by the `top_k` input on the query page.
pub const MAX_TOP_K: u32 = 50;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
