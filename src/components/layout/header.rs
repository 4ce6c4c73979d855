//! Header component with responsive navigation.
//!
//! Owns the navigation drawer controller for the lifetime of the shell. The
//! viewport width is classified against the configured breakpoint on every
//! resize and fed to the controller as an event; the open flag survives both
//! navigation and viewport changes.
//!
//! | Viewport | Display |
//! |----------|---------|
//! | Wide (>= breakpoint) | Brand + inline menu |
//! | Compact (< breakpoint) | Menu button + brand, overlay drawer when open |

use embediq_core::{NavDrawer, NavEvent, NavItem, NavMenu};
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{UseWindowSizeReturn, use_window_size};

use super::NavDrawerPanel;
use crate::app::AppContext;
use crate::components::RouteContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/header.module.css");

/// Application header.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let breakpoint = ctx.site.with_value(|s| s.breakpoint);
    let nav_items = StoredValue::new(ctx.site.with_value(|s| s.nav.items().to_vec()));
    let brand = ctx.brand();
    let drawer_brand = brand.clone();

    // Viewport classification, recomputed on every resize signal
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let viewport = Memo::new(move |_| breakpoint.classify(width.get()));

    let drawer = RwSignal::new(NavDrawer::new(viewport.get_untracked()));
    let dispatch = move |event: NavEvent| drawer.update(|d| d.apply(event));

    Effect::new(move || {
        dispatch(NavEvent::ViewportChanged(viewport.get()));
    });

    // Escape dismisses the overlay
    let key_handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && drawer.get_untracked().overlay_visible() {
            dispatch(NavEvent::Dismiss);
        }
    });
    on_cleanup(move || key_handle.remove());

    let menu_button_visible = Signal::derive(move || drawer.with(|d| d.menu_button_visible()));
    let inline_menu_visible = Signal::derive(move || drawer.with(|d| d.inline_menu_visible()));
    let overlay_visible = Signal::derive(move || drawer.with(|d| d.overlay_visible()));

    view! {
        <header class=css::appBar>
            <div class=css::toolbar>
                <Show when=move || menu_button_visible.get()>
                    <button
                        class=css::menuButton
                        aria-label="open drawer"
                        aria-expanded=move || overlay_visible.get().to_string()
                        on:click=move |_| dispatch(NavEvent::Toggle)
                    >
                        <Icon icon=ic::MENU />
                    </button>
                </Show>

                <a class=css::brand href="#/">{brand}</a>

                <Show when=move || inline_menu_visible.get()>
                    <nav class=css::inlineNav>
                        {nav_items
                            .get_value()
                            .into_iter()
                            .map(|item| view! { <NavLink item=item /> })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>

        <Show when=move || overlay_visible.get()>
            <NavDrawerPanel
                brand=drawer_brand.clone()
                items=nav_items.get_value()
                on_event=Callback::new(dispatch)
            />
        </Show>
    }
}

/// Inline header link, highlighted when it is the current location.
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let route = use_context::<RouteContext>().expect("RouteContext must be provided");

    let href = item.href();
    let label = item.label.clone();
    let class = move || {
        if route.path.with(|current| NavMenu::is_current(&item, current)) {
            format!("{} {}", css::navButton, css::navButtonActive)
        } else {
            css::navButton.to_string()
        }
    };

    view! {
        <a class=class href=href>
            {label}
        </a>
    }
}
