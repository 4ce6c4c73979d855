//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use embediq_core::SiteConfig;
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. The site configuration is immutable after
/// startup; mutable navigation state is owned by the components that mount
/// it (drawer by the header, tab selection by the docs page).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parsed site configuration (brand, nav items, routes, breakpoint).
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: StoredValue::new(site),
        }
    }

    /// Brand name shown in the header, drawer and footer.
    pub fn brand(&self) -> String {
        self.site.with_value(|s| s.name.clone())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Provides the AppContext built from the injected site configuration
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which owns the layout shell
#[component]
pub fn App(site: SiteConfig) -> impl IntoView {
    provide_context(AppContext::new(site));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback role="alert">
                    <div class=css::fallbackBody>
                        <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                        <p class=css::fallbackMessage>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul class=css::errorList>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                            }
                        </ul>
                        <button class=css::reloadButton on:click=move |_| dom::reload()>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
