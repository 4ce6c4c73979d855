//! Contract of the retrieval / answering API described by the docs page.
//!
//! The shell never calls this API. These types exist so that the example
//! payloads rendered in the documentation are produced from the same shapes
//! the backend accepts and returns, instead of hand-written JSON that can
//! drift.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Base URL shown in the documentation when the config does not set one.
pub const DEFAULT_BASE_URL: &str = "http://api.embediq.example/api/v1";

/// Authentication header documented for every call.
pub const AUTH_HEADER_EXAMPLE: &str = "Authorization: Bearer YOUR_API_KEY";

/// Default number of results / context chunks when `top_k` is omitted.
pub const DEFAULT_TOP_K: u32 = 5;

fn default_top_k() -> u32 {
    DEFAULT_TOP_K
}

// ============================================================================
// Endpoints
// ============================================================================

/// Documented endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Ingest,
    Search,
    Query,
    Health,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [Self::Ingest, Self::Search, Self::Query, Self::Health];

    /// HTTP method(s) as displayed.
    pub fn method(self) -> &'static str {
        match self {
            Self::Ingest | Self::Query => "POST",
            Self::Search => "GET/POST",
            Self::Health => "GET",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Ingest => "/ingest",
            Self::Search => "/search",
            Self::Query => "/query",
            Self::Health => "/health",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Ingest => "Upload documents for embedding generation",
            Self::Search => "Search for documents based on vector similarity",
            Self::Query => "Submit a natural language query and get a context-based answer",
            Self::Health => "Check the health status of the API",
        }
    }

    /// `POST /ingest` style signature.
    pub fn signature(self) -> String {
        format!("{} {}", self.method(), self.path())
    }

    /// Full URL under `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

// ============================================================================
// Ingest
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl IngestRequest {
    pub fn example() -> Self {
        Self {
            title: "Document Title".into(),
            source: Some("Optional Source".into()),
            author: Some("Optional Author".into()),
            content: "Full document content...".into(),
            metadata: Some(json!({ "optional": "metadata", "customField": "value" })),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl DocumentResponse {
    pub fn example() -> Self {
        let request = IngestRequest::example();
        Self {
            id: 123,
            title: request.title,
            source: request.source,
            author: request.author,
            created_at: "2023-08-15T14:32:21Z".into(),
            updated_at: "2023-08-15T14:32:21Z".into(),
            metadata: request.metadata,
        }
    }
}

// ============================================================================
// Search
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

impl SearchRequest {
    pub fn example() -> Self {
        Self {
            query: "Your search query".into(),
            top_k: DEFAULT_TOP_K,
            filters: Some(SearchFilters {
                source: Some("Optional source filter".into()),
                author: Some("Optional author filter".into()),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: u64,
    pub document_title: String,
    pub chunk_id: u64,
    pub chunk_text: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: u64,
    pub latency_ms: f64,
}

impl SearchResponse {
    pub fn example() -> Self {
        Self {
            query: "Your search query".into(),
            results: vec![SearchResult {
                document_id: 123,
                document_title: "Document Title".into(),
                chunk_id: 456,
                chunk_text: "Relevant text from the document...".into(),
                score: 0.92,
                metadata: json!({ "source": "Document Source", "author": "Document Author" }),
            }],
            total: 10,
            latency_ms: 42.5,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_filter: Option<ContextFilter>,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

impl QueryRequest {
    /// Build a request from user input. Blank source filters are dropped.
    pub fn new(query: &str, top_k: u32, source: Option<&str>) -> Self {
        let source = source.map(str::trim).filter(|s| !s.is_empty());
        Self {
            query: query.trim().to_string(),
            context_filter: source.map(|s| ContextFilter {
                source: Some(s.to_string()),
            }),
            top_k,
        }
    }

    /// The backend rejects empty queries.
    pub fn is_submittable(&self) -> bool {
        !self.query.is_empty() && self.top_k > 0
    }

    pub fn example() -> Self {
        Self {
            query: "Your natural language question".into(),
            context_filter: Some(ContextFilter {
                source: Some("Optional source filter".into()),
            }),
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextChunk {
    pub text: String,
    pub document_id: u64,
    pub chunk_id: u64,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub id: String,
    pub source: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub answer: String,
    pub context_chunks: Vec<ContextChunk>,
    pub sources: Vec<SourceRef>,
    pub latency_ms: f64,
}

impl QueryResponse {
    pub fn example() -> Self {
        Self {
            query: "Your natural language question".into(),
            answer: "AI-generated answer based on the retrieved context...".into(),
            context_chunks: vec![ContextChunk {
                text: "Relevant text from document...".into(),
                document_id: 123,
                chunk_id: 456,
                score: 0.92,
            }],
            sources: vec![SourceRef {
                title: "Document Title".into(),
                id: "123".into(),
                source: "Document Source".into(),
                author: "Document Author".into(),
            }],
            latency_ms: 742.5,
        }
    }
}

// ============================================================================
// Health
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn example() -> Self {
        Self {
            status: "ok".into(),
            service: "embediq-api".into(),
        }
    }
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Pretty-printed JSON for a documentation code block.
pub fn pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Equivalent `curl` invocation for a JSON `POST` to `endpoint`.
pub fn curl_command<T: Serialize>(
    base_url: &str,
    endpoint: Endpoint,
    body: &T,
) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string(body)?.replace('\'', r"'\''");
    Ok(format!(
        "curl -X POST '{}' \\\n  -H 'Authorization: Bearer YOUR_API_KEY' \\\n  -H 'Content-Type: application/json' \\\n  -d '{}'",
        endpoint.url(base_url),
        body
    ))
}
