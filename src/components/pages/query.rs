//! Query interface entry point.
//!
//! Lets the user compose a question and shows the `POST /query` request it
//! maps to, plus an equivalent `curl` invocation. Nothing is sent from the
//! browser.

use embediq_core::api::{DEFAULT_TOP_K, Endpoint, QueryRequest, curl_command};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::MAX_TOP_K;
use crate::utils::format::json_block;

stylance::import_crate_style!(css, "src/components/pages/query.module.css");

/// Parse the `top_k` input, clamped to `1..=MAX_TOP_K`.
fn parse_top_k(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .map(|k| k.clamp(1, MAX_TOP_K))
        .unwrap_or(DEFAULT_TOP_K)
}

#[component]
pub fn QueryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let base_url = ctx.site.with_value(|s| s.api_base_url.clone());

    let query = RwSignal::new(String::new());
    let top_k = RwSignal::new(DEFAULT_TOP_K);
    let source = RwSignal::new(String::new());

    let request = Memo::new(move |_| {
        source.with(|src| query.with(|q| QueryRequest::new(q, top_k.get(), Some(src.as_str()))))
    });

    let request_json = Signal::derive(move || request.with(json_block));
    let curl = Signal::derive(move || {
        request.with(|req| {
            curl_command(&base_url, Endpoint::Query, req).unwrap_or_else(|e| {
                log::error!("failed to build curl command: {}", e);
                String::new()
            })
        })
    });

    view! {
        <section class=css::query>
            <h1 class=css::pageTitle>"Query"</h1>
            <p class=css::muted>
                "Ask a natural language question. The answer is generated from the most \
                 relevant chunks of your ingested documents."
            </p>

            <form class=css::form on:submit=move |ev| ev.prevent_default()>
                <label class=css::field>
                    <span class=css::fieldLabel>"Question"</span>
                    <textarea
                        class=css::input
                        rows="4"
                        placeholder="What would you like to know?"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class=css::fieldRow>
                    <label class=css::field>
                        <span class=css::fieldLabel>"Context chunks (top_k)"</span>
                        <input
                            class=css::input
                            type="number"
                            min="1"
                            max=MAX_TOP_K.to_string()
                            prop:value=move || top_k.get().to_string()
                            on:change=move |ev| top_k.set(parse_top_k(&event_target_value(&ev)))
                        />
                    </label>

                    <label class=css::field>
                        <span class=css::fieldLabel>"Source filter (optional)"</span>
                        <input
                            class=css::input
                            type="text"
                            placeholder="e.g. handbook"
                            prop:value=move || source.get()
                            on:input=move |ev| source.set(event_target_value(&ev))
                        />
                    </label>
                </div>
            </form>

            <Show
                when=move || request.with(QueryRequest::is_submittable)
                fallback=|| view! {
                    <p class=css::hint>"Enter a question to preview the request."</p>
                }
            >
                <h2 class=css::sectionTitle>"Request Body"</h2>
                <pre class=css::code><code>{move || request_json.get()}</code></pre>

                <h2 class=css::sectionTitle>"curl"</h2>
                <pre class=css::code><code>{move || curl.get()}</code></pre>
            </Show>

            <p class=css::muted>
                "See the " <a href="#/docs">"API documentation"</a>
                " for the full request and response format."
            </p>
        </section>
    }
}
