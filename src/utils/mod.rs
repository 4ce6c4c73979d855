//! Utility modules.
//!
//! - [`dom`] - Browser window, location and document helpers
//! - [`format`] - Display string formatting
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
pub mod format;
pub mod logger;
