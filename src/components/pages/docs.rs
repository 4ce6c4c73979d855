//! API reference page.
//!
//! Four panels (Overview, Ingest, Search, Query) behind a tab bar. The tab
//! selection is created when the page mounts and dropped when it unmounts,
//! so returning to the page always starts on Overview. Only the active panel
//! is rendered.
//!
//! Example payloads are serialized from the contract types in
//! [`embediq_core::api`] rather than written by hand.

use embediq_core::api::{
    AUTH_HEADER_EXAMPLE, DocumentResponse, Endpoint, IngestRequest, QueryRequest, QueryResponse,
    SearchRequest, SearchResponse,
};
use embediq_core::{DocsTab, TabSelector, TabSet};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::format::json_block;

stylance::import_crate_style!(css, "src/components/pages/docs.module.css");

#[component]
pub fn DocsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (name, base_url) = ctx.site.with_value(|s| (s.name.clone(), s.api_base_url.clone()));

    let tabs = RwSignal::new(TabSelector::<DocsTab>::new());
    // Memo so that re-selecting the active tab does not re-render the panel
    let active = Memo::new(move |_| tabs.with(|t| t.active()));
    let on_select = Callback::new(move |tab: DocsTab| tabs.update(|t| t.select(tab)));

    view! {
        <section class=css::docs>
            <h1 class=css::title>"API Documentation"</h1>
            <p class=css::lead>
                "Integrate " {name} "'s RAG capabilities into your applications with our \
                 comprehensive API."
            </p>

            <TabBar active=active on_select=on_select />

            <div
                class=css::panel
                role="tabpanel"
                id=move || panel_id(active.get())
                data-tab=move || active.get().label()
            >
                {move || render_panel(active.get(), &base_url)}
            </div>
        </section>
    }
}

fn tab_id(tab: DocsTab) -> String {
    format!("docs-tab-{}", tab.label().to_lowercase())
}

fn panel_id(tab: DocsTab) -> String {
    format!("docs-panel-{}", tab.label().to_lowercase())
}

/// Row of tab triggers, one per panel.
#[component]
fn TabBar(active: Memo<DocsTab>, on_select: Callback<DocsTab>) -> impl IntoView {
    view! {
        <div class=css::tabBar role="tablist">
            {DocsTab::ALL
                .iter()
                .map(|&tab| {
                    let selected = move || active.get() == tab;
                    view! {
                        <button
                            class=css::tab
                            class:selected=selected
                            role="tab"
                            id=tab_id(tab)
                            aria-selected=move || selected().to_string()
                            aria-controls=panel_id(tab)
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Exhaustive panel dispatch.
fn render_panel(tab: DocsTab, base_url: &str) -> AnyView {
    match tab {
        DocsTab::Overview => view! { <OverviewPanel base_url=base_url.to_string() /> }.into_any(),
        DocsTab::Ingest => view! {
            <EndpointPanel
                heading="Document Ingestion"
                description="The ingest endpoint allows you to upload documents for processing. \
                             Documents are processed asynchronously to generate embeddings for \
                             semantic search."
                endpoint=Endpoint::Ingest
                request=json_block(&IngestRequest::example())
                response=json_block(&DocumentResponse::example())
            />
        }
        .into_any(),
        DocsTab::Search => view! {
            <EndpointPanel
                heading="Search"
                description="The search endpoint allows you to find documents based on vector \
                             similarity to your query."
                endpoint=Endpoint::Search
                request=json_block(&SearchRequest::example())
                response=json_block(&SearchResponse::example())
            />
        }
        .into_any(),
        DocsTab::Query => view! {
            <EndpointPanel
                heading="Query"
                description="The query endpoint allows you to ask natural language questions and \
                             receive AI-generated answers based on the context from your documents."
                endpoint=Endpoint::Query
                request=json_block(&QueryRequest::example())
                response=json_block(&QueryResponse::example())
            />
        }
        .into_any(),
    }
}

#[component]
fn OverviewPanel(base_url: String) -> impl IntoView {
    view! {
        <h2 class=css::panelTitle>"API Overview"</h2>
        <p>
            "The API lets you upload documents, search for relevant information, and query \
             using LLMs with RAG. All endpoints are available at the base URL:"
        </p>
        <pre class=css::code><code>{base_url}</code></pre>

        <h3 class=css::sectionTitle>"Authentication"</h3>
        <p>
            "All API requests require authentication using an API key. Include your API key \
             in the request headers:"
        </p>
        <pre class=css::code><code>{AUTH_HEADER_EXAMPLE}</code></pre>

        <h3 class=css::sectionTitle>"Available Endpoints"</h3>
        {Endpoint::ALL
            .iter()
            .map(|endpoint| view! {
                <div class=css::endpointCard>
                    <div class=css::endpointSignature>{endpoint.signature()}</div>
                    <div>{endpoint.summary()}</div>
                </div>
            })
            .collect_view()}
    }
}

#[component]
fn EndpointPanel(
    heading: &'static str,
    description: &'static str,
    endpoint: Endpoint,
    request: String,
    response: String,
) -> impl IntoView {
    view! {
        <h2 class=css::panelTitle>{heading}</h2>
        <p>{description}</p>

        <h3 class=css::sectionTitle>"Endpoint"</h3>
        <pre class=css::code><code>{endpoint.signature()}</code></pre>

        <h3 class=css::sectionTitle>"Request Body"</h3>
        <pre class=css::code><code>{request}</code></pre>

        <h3 class=css::sectionTitle>"Response"</h3>
        <pre class=css::code><code>{response}</code></pre>
    }
}
