//! 404 page for locations no route matches.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/not_found.module.css");

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class=css::notFound>
            <h1 class=css::code>"404"</h1>
            <h2 class=css::title>"Page Not Found"</h2>
            <p class=css::message>
                "The page you are looking for does not exist or has been moved."
            </p>
            <a class=css::homeLink href="#/">
                <Icon icon=ic::ARROW_LEFT />
                " Return to Home"
            </a>
        </section>
    }
}
