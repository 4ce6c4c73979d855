//! Viewport classification against a single breakpoint.

use serde::Deserialize;

/// Viewport width class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrow screens: navigation lives behind the overlay drawer.
    Compact,
    /// Wide screens: navigation is shown inline in the header.
    #[default]
    Wide,
}

impl ViewportClass {
    #[inline]
    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// Breakpoint threshold in CSS pixels.
///
/// A width is compact iff it is strictly below the threshold, so a width
/// exactly at the threshold is always wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// Default threshold (900px, the usual `md` breakpoint).
    pub const DEFAULT_PX: u32 = 900;

    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    pub const fn px(self) -> u32 {
        self.0
    }

    /// Classify a viewport width.
    ///
    /// Non-finite widths (NaN before layout) classify as wide.
    pub fn classify(self, width: f64) -> ViewportClass {
        if width.is_finite() && width < f64::from(self.0) {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}
