//! Persistent layout shell.
//!
//! Header and footer are mounted once and survive navigation; the router
//! fills the single content slot with the current page view.
//!
//! - [`Header`] - Brand, inline menu (wide) or menu button (compact)
//! - [`NavDrawerPanel`] - Overlay navigation for compact viewports
//! - [`Footer`] - Copyright and footer links

mod drawer;
mod footer;
mod header;

pub use drawer::NavDrawerPanel;
pub use footer::Footer;
pub use header::Header;

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Layout shell with one content slot.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class=css::root>
            <Header />
            <main class=css::main>
                <div class=css::container>{children()}</div>
            </main>
            <Footer />
        </div>
    }
}
