//! Overlay navigation drawer for compact viewports.

use embediq_core::{NavEvent, NavItem, NavMenu};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::RouteContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/drawer.module.css");

/// Drawer panel with a dismissible backdrop.
///
/// Rendered by the header only while the overlay is visible. Choosing a
/// destination emits [`NavEvent::ItemSelected`] explicitly; the anchor's
/// default action performs the navigation itself.
#[component]
pub fn NavDrawerPanel(
    brand: String,
    items: Vec<NavItem>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let route = use_context::<RouteContext>().expect("RouteContext must be provided");

    view! {
        <div class=css::overlay>
            <div
                class=css::backdrop
                aria-hidden="true"
                on:click=move |_| on_event.run(NavEvent::Dismiss)
            ></div>

            <aside class=css::panel role="dialog" aria-label="Navigation">
                <div class=css::panelHeader>
                    <span class=css::brand>{brand}</span>
                    <button
                        class=css::closeButton
                        aria-label="close drawer"
                        on:click=move |_| on_event.run(NavEvent::Dismiss)
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>

                <ul class=css::list>
                    {items
                        .into_iter()
                        .map(|item| {
                            let href = item.href();
                            let label = item.label.clone();
                            let is_current =
                                move || route.path.with(|p| NavMenu::is_current(&item, p));
                            view! {
                                <li>
                                    <a
                                        class=css::item
                                        class:active=is_current
                                        href=href
                                        on:click=move |_| on_event.run(NavEvent::ItemSelected)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
        </div>
    }
}
