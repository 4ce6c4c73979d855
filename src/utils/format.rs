//! Formatting utilities for display strings.

use serde::Serialize;

/// Footer copyright line (e.g., "© 2026 EmbedIQ. All rights reserved.").
pub fn copyright_line(year: u32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

/// Document title for a page (e.g., "API Documentation | EmbedIQ").
pub fn document_title(page_title: &str, brand: &str) -> String {
    format!("{} | {}", page_title, brand)
}

/// Pretty-printed JSON for a code block.
///
/// Serialization of the contract types cannot fail in practice; if it does,
/// the error is logged and shown in place of the payload.
pub fn json_block<T: Serialize>(value: &T) -> String {
    embediq_core::api::pretty(value).unwrap_or_else(|e| {
        log::error!("failed to render JSON example: {}", e);
        format!("/* {} */", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use embediq_core::api::HealthResponse;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "EmbedIQ"),
            "© 2026 EmbedIQ. All rights reserved."
        );
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("Home", "EmbedIQ"), "Home | EmbedIQ");
    }

    #[test]
    fn test_json_block() {
        assert_eq!(
            json_block(&HealthResponse::example()),
            "{\n  \"status\": \"ok\",\n  \"service\": \"embediq-api\"\n}"
        );
    }
}
