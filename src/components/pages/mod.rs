//! Page views rendered in the layout's content slot.
//!
//! - [`HomePage`] - Landing page with feature highlights
//! - [`QueryPage`] - Query interface entry point (request builder)
//! - [`DocsPage`] - API reference with tabbed panels
//! - [`NotFoundPage`] - Fallback for unmatched locations

mod docs;
mod home;
mod not_found;
mod query;

pub use docs::DocsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use query::QueryPage;
