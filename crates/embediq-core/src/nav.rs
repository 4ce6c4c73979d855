//! Navigation destinations shown in the header menu and the overlay drawer.

use serde::Deserialize;

use crate::route::hash_for;

/// A named navigation destination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Link target for this destination (`#/docs`).
    pub fn href(&self) -> String {
        hash_for(&self.path)
    }
}

/// Ordered navigation menu. Order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMenu {
    items: Vec<NavItem>,
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the item is the destination for the current location path.
    pub fn is_current(item: &NavItem, current_path: &str) -> bool {
        item.path == current_path
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(vec![
            NavItem::new("Home", "/"),
            NavItem::new("Query", "/query"),
            NavItem::new("API Docs", "/docs"),
        ])
    }
}
