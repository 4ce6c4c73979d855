//! Application router component.
//!
//! Handles URL-based routing with hash history, so the shell can be served
//! from any static host without rewrite rules. Uses native hashchange events
//! instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the location path is derived from `#/path`
//! - **Layout never re-renders on navigation**: header and footer stay mounted
//! - **Only the content slot swaps**: re-rendered when the resolved page changes
//! - **hashchange events**: browser back/forward buttons work automatically

use embediq_core::PageId;
use embediq_core::route::path_from_hash;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::components::pages::{DocsPage, HomePage, NotFoundPage, QueryPage};
use crate::utils::dom;
use crate::utils::format::document_title;

// ============================================================================
// Route Context
// ============================================================================

/// Current location, readable from any component without prop drilling.
#[derive(Clone, Copy)]
pub struct RouteContext {
    /// Location path (`/docs`).
    pub path: Memo<String>,
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route table (exact matches, see [`embediq_core::RouteTable::standard`]):
/// - `#/` → Home
/// - `#/query` → Query entry point
/// - `#/docs` → API reference
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Raw hash, updated by the hashchange listener
    let hash = RwSignal::new(dom::current_hash());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            hash.set(dom::current_hash());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let path = Memo::new(move |_| path_from_hash(&hash.get()));
    let page = Memo::new(move |_| ctx.site.with_value(|s| s.routes.resolve(&path.get())));

    provide_context(RouteContext { path });

    // Keep the document title in sync and start each page at the top
    Effect::new(move |prev: Option<PageId>| {
        let current = page.get();
        log::debug!("route {:?} -> {:?}", path.get_untracked(), current);
        dom::set_document_title(&document_title(current.title(), &ctx.brand()));
        if prev.is_some_and(|p| p != current) {
            dom::scroll_to_top();
        }
        current
    });

    view! {
        <Layout>
            {move || render_page(page.get())}
        </Layout>
    }
}

/// Exhaustive page dispatch. Adding a [`PageId`] variant fails to compile
/// until it is given a view here.
fn render_page(page: PageId) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage /> }.into_any(),
        PageId::Query => view! { <QueryPage /> }.into_any(),
        PageId::Docs => view! { <DocsPage /> }.into_any(),
        PageId::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
