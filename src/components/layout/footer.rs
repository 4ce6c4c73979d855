//! Footer component with copyright and links.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::dom;
use crate::utils::format::copyright_line;

stylance::import_crate_style!(css, "src/components/layout/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let copyright = copyright_line(dom::current_year(), &ctx.brand());
    let links = ctx.site.with_value(|s| s.footer_links.clone());

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <p class=css::copyright>{copyright}</p>
                <nav class=css::links>
                    {links
                        .into_iter()
                        .map(|link| {
                            // Placeholders get no href so they never touch the location hash
                            let href = link.target().map(str::to_owned);
                            view! { <a class=css::link href=href>{link.label}</a> }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
