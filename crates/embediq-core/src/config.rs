//! Site configuration.
//!
//! The web shell compiles a TOML document into the binary and parses it once
//! at startup. The resulting [`SiteConfig`] is immutable and handed to the
//! layout and router as shared context.
//!
//! ```toml
//! [site]
//! name = "EmbedIQ"
//! api_base_url = "http://api.embediq.example/api/v1"
//! breakpoint = 900
//!
//! [[nav]]
//! label = "Home"
//! path = "/"
//! ```

use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use crate::nav::{NavItem, NavMenu};
use crate::route::{RouteTable, path_from_hash};
use crate::viewport::Breakpoint;

/// Footer link (label + raw href, may be external).
///
/// A link without an `href` (or with an empty or bare `#` one) is a
/// placeholder. Under hash routing a bare `#` would clear the location and
/// land on the home page, so placeholders render without a target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// Navigation target, `None` for placeholders.
    pub fn target(&self) -> Option<&str> {
        self.href
            .as_deref()
            .map(str::trim)
            .filter(|href| !href.is_empty() && *href != "#")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    nav: Option<Vec<NavItem>>,
    #[serde(default)]
    footer_links: Option<Vec<FooterLink>>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSite {
    name: String,
    tagline: String,
    api_base_url: String,
    breakpoint: Breakpoint,
}

impl Default for RawSite {
    fn default() -> Self {
        Self {
            name: "EmbedIQ".into(),
            tagline: "A powerful RAG system that combines vector embeddings with LLM \
                      capabilities to provide context-aware AI responses for your documents."
                .into(),
            api_base_url: DEFAULT_BASE_URL.into(),
            breakpoint: Breakpoint::default(),
        }
    }
}

/// Immutable site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub api_base_url: String,
    pub breakpoint: Breakpoint,
    pub nav: NavMenu,
    pub footer_links: Vec<FooterLink>,
    pub routes: RouteTable,
}

impl SiteConfig {
    /// Parse and validate a TOML document against the standard route table.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(src)?;
        let routes = RouteTable::new(RouteTable::standard_routes())?;
        let config = Self {
            name: raw.site.name,
            tagline: raw.site.tagline,
            api_base_url: raw.site.api_base_url,
            breakpoint: raw.site.breakpoint,
            nav: raw.nav.map(NavMenu::new).unwrap_or_default(),
            footer_links: raw.footer_links.unwrap_or_else(default_footer_links),
            routes,
        };
        config.validate()?;
        log::info!(
            "loaded site config for {:?} ({} nav items, breakpoint {}px)",
            config.name,
            config.nav.items().len(),
            config.breakpoint.px()
        );
        Ok(config)
    }

    /// Every nav item must have a label and point at a literal route, so the
    /// menu never links to the not-found page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav.is_empty() {
            return Err(ConfigError::EmptyNav);
        }
        if self.breakpoint.px() == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        for item in self.nav.items() {
            if item.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel(item.path.clone()));
            }
            if !self.routes.is_routed(&item.path) {
                return Err(ConfigError::UnroutedNavPath {
                    label: item.label.clone(),
                    path: item.path.clone(),
                });
            }
        }
        // In-app footer targets must not fall through to the not-found page
        for link in &self.footer_links {
            let Some(href) = link.target().filter(|href| href.starts_with('#')) else {
                continue;
            };
            if !self.routes.is_routed(&path_from_hash(href)) {
                return Err(ConfigError::UnroutedFooterLink {
                    label: link.label.clone(),
                    href: href.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = RawSite::default();
        Self {
            name: site.name,
            tagline: site.tagline,
            api_base_url: site.api_base_url,
            breakpoint: site.breakpoint,
            nav: NavMenu::default(),
            footer_links: default_footer_links(),
            routes: RouteTable::standard(),
        }
    }
}

fn default_footer_links() -> Vec<FooterLink> {
    ["Privacy Policy", "Terms of Service", "Contact"]
        .into_iter()
        .map(FooterLink::placeholder)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_full_document() {
        let src = r#"
            [site]
            name = "Acme Search"
            tagline = "Find things"
            api_base_url = "https://api.acme.test/v1"
            breakpoint = 768

            [[nav]]
            label = "Start"
            path = "/"

            [[nav]]
            label = "Reference"
            path = "/docs"

            [[footer_links]]
            label = "Contact"
            href = "mailto:hi@acme.test"
        "#;
        let config = SiteConfig::from_toml(src).unwrap();
        assert_eq!(config.name, "Acme Search");
        assert_eq!(config.breakpoint, Breakpoint::new(768));
        assert_eq!(config.nav.items().len(), 2);
        assert_eq!(config.nav.items()[1], NavItem::new("Reference", "/docs"));
        assert_eq!(
            config.footer_links,
            [FooterLink::new("Contact", "mailto:hi@acme.test")]
        );
    }

    #[test]
    fn test_rejects_unrouted_nav_path() {
        let src = r#"
            [[nav]]
            label = "Blog"
            path = "/blog"
        "#;
        assert!(matches!(
            SiteConfig::from_toml(src),
            Err(ConfigError::UnroutedNavPath { path, .. }) if path == "/blog"
        ));
    }

    #[test]
    fn test_rejects_empty_nav_and_labels() {
        assert!(matches!(
            SiteConfig::from_toml("nav = []"),
            Err(ConfigError::EmptyNav)
        ));

        let src = r#"
            [[nav]]
            label = "  "
            path = "/"
        "#;
        assert!(matches!(
            SiteConfig::from_toml(src),
            Err(ConfigError::EmptyLabel(_))
        ));
    }

    #[test]
    fn test_footer_placeholders_have_no_target() {
        let src = r##"
            [[footer_links]]
            label = "Privacy Policy"

            [[footer_links]]
            label = "Terms of Service"
            href = "#"

            [[footer_links]]
            label = "Contact"
            href = " "

            [[footer_links]]
            label = "Reference"
            href = "#/docs"
        "##;
        let config = SiteConfig::from_toml(src).unwrap();
        let targets: Vec<_> = config.footer_links.iter().map(FooterLink::target).collect();
        assert_eq!(targets, [None, None, None, Some("#/docs")]);

        for link in SiteConfig::default().footer_links {
            assert_eq!(link.target(), None, "{}", link.label);
        }
    }

    #[test]
    fn test_rejects_unrouted_footer_hash() {
        let src = r##"
            [[footer_links]]
            label = "Blog"
            href = "#/blog"
        "##;
        assert!(matches!(
            SiteConfig::from_toml(src),
            Err(ConfigError::UnroutedFooterLink { href, .. }) if href == "#/blog"
        ));
    }

    #[test]
    fn test_rejects_zero_breakpoint() {
        let src = "[site]\nbreakpoint = 0\n";
        assert!(matches!(
            SiteConfig::from_toml(src),
            Err(ConfigError::ZeroBreakpoint)
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            SiteConfig::from_toml("[site\nname = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml("[site]\nunknown = true\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
