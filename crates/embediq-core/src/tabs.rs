//! Tab selector over a fixed, ordered set of content panels.

use std::fmt;

/// A closed, ordered set of tab panels.
///
/// Implementors are field-less enums listed in display order in [`ALL`];
/// an out-of-range tab therefore cannot be constructed.
///
/// [`ALL`]: TabSet::ALL
pub trait TabSet: Copy + Eq + fmt::Debug + 'static {
    /// Every panel, in display order. Must not be empty; an empty set fails
    /// to compile as soon as a [`TabSelector`] is built over it.
    const ALL: &'static [Self];

    /// Trigger label.
    fn label(self) -> &'static str;

    /// Position of this panel in [`ALL`](TabSet::ALL).
    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Panel at `index`, if in range.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Panels of the API reference page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocsTab {
    Overview,
    Ingest,
    Search,
    Query,
}

impl TabSet for DocsTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Ingest, Self::Search, Self::Query];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ingest => "Ingest",
            Self::Search => "Search",
            Self::Query => "Query",
        }
    }
}

/// Active-panel selector. Starts on the first panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelector<T: TabSet> {
    active: T,
}

impl<T: TabSet> TabSelector<T> {
    pub fn new() -> Self {
        const { assert!(!T::ALL.is_empty(), "TabSet::ALL must list at least one panel") };
        Self { active: T::ALL[0] }
    }

    /// Make `tab` the active panel. Selecting the active tab is a no-op.
    pub fn select(&mut self, tab: T) {
        self.active = tab;
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        T::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        T::ALL.is_empty()
    }
}

impl<T: TabSet> Default for TabSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}
