//! Landing page: hero section and feature highlights.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (name, tagline) = ctx.site.with_value(|s| (s.name.clone(), s.tagline.clone()));

    view! {
        <section class=css::hero>
            <h1 class=css::heroTitle>"Welcome to " {name.clone()}</h1>
            <p class=css::heroTagline>{tagline}</p>
            <div class=css::heroActions>
                <a class=css::buttonContained href="#/query">"Try the Query Interface"</a>
                <a class=css::buttonOutlined href="#/docs">"API Documentation"</a>
            </div>
        </section>

        <section class=css::features>
            <FeatureCard
                icon=ic::SEARCH
                title="High-Quality Search"
                body="Utilize advanced vector embedding search to find the most relevant \
                      information in your document collection."
            />
            <FeatureCard
                icon=ic::STORAGE
                title="Context-Aware LLM"
                body="Get AI-generated answers that are informed by the context from your \
                      documents, with source attribution."
            />
            <FeatureCard
                icon=ic::CODE
                title="Developer-Friendly API"
                body=format!(
                    "Integrate {}'s capabilities into your applications with our \
                     comprehensive API and documentation.",
                    name
                )
            />
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: icondata::Icon,
    title: &'static str,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <article class=css::card>
            <div class=css::cardIcon>
                <Icon icon=icon />
            </div>
            <h2 class=css::cardTitle>{title}</h2>
            <p class=css::cardBody>{body}</p>
        </article>
    }
}
