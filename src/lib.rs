//! EmbedIQ web shell.
//!
//! Client-rendered (Leptos CSR) presentation shell for the EmbedIQ
//! retrieval service: a persistent header/footer chrome around the landing
//! page, the query entry point, the API reference and a not-found fallback.
//! Navigation state machines live in [`embediq_core`]; this crate binds them
//! to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod utils;

use embediq_core::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use app::App;

/// Entry point: install panic hook and logger, parse the site config and
/// mount the application onto `#app`.
pub fn start() {
    console_error_panic_hook::set_once();
    utils::logger::init(config::LOG_LEVEL);

    let site = SiteConfig::from_toml(config::SITE_CONFIG).expect("Invalid compiled-in site config");

    let root = document()
        .get_element_by_id(config::ROOT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App site=site /> }).forget();
}
