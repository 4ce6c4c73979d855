//! Responsive navigation controller.
//!
//! Decides, independently of the current route, whether the primary
//! navigation is shown inline (wide viewports) or behind a toggled overlay
//! drawer (compact viewports).
//!
//! ```text
//!            Toggle
//!   Closed ──────────▶ Open
//!     ▲  ◀──────────    │
//!     │    Toggle       │ ItemSelected / Dismiss
//!     └─────────────────┘
//! ```
//!
//! Viewport changes never touch the open flag. A wide viewport only hides the
//! overlay; shrinking back to compact shows it again if it was left open.

use crate::viewport::ViewportClass;

/// Open/closed flag of the overlay drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Events consumed by [`NavDrawer::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Menu button pressed.
    Toggle,
    /// Resize signal, already classified against the breakpoint.
    ViewportChanged(ViewportClass),
    /// A destination was chosen from the drawer.
    ItemSelected,
    /// Backdrop click or Escape key.
    Dismiss,
}

/// Drawer state plus the viewport class it is projected through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDrawer {
    state: DrawerState,
    viewport: ViewportClass,
}

impl NavDrawer {
    /// Closed drawer for the given viewport.
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            state: DrawerState::Closed,
            viewport,
        }
    }

    /// Pure transition function.
    #[must_use]
    pub fn update(self, event: NavEvent) -> Self {
        let next = match event {
            NavEvent::Toggle => Self {
                state: self.state.flipped(),
                ..self
            },
            NavEvent::ViewportChanged(viewport) => Self { viewport, ..self },
            NavEvent::ItemSelected | NavEvent::Dismiss => Self {
                state: DrawerState::Closed,
                ..self
            },
        };
        if next != self {
            log::debug!("nav drawer {:?}: {:?} -> {:?}", event, self, next);
        }
        next
    }

    /// In-place variant of [`update`](Self::update) for signal updates.
    pub fn apply(&mut self, event: NavEvent) {
        *self = self.update(event);
    }

    pub fn state(self) -> DrawerState {
        self.state
    }

    pub fn viewport(self) -> ViewportClass {
        self.viewport
    }

    /// Overlay is rendered only when open on a compact viewport.
    pub fn overlay_visible(self) -> bool {
        self.state.is_open() && self.viewport.is_compact()
    }

    /// Menu button that toggles the drawer (compact only).
    pub fn menu_button_visible(self) -> bool {
        self.viewport.is_compact()
    }

    /// Inline header menu (wide only).
    pub fn inline_menu_visible(self) -> bool {
        !self.viewport.is_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> NavDrawer {
        NavDrawer::new(ViewportClass::Compact)
    }

    #[test]
    fn test_initially_closed() {
        assert_eq!(compact().state(), DrawerState::Closed);
        assert_eq!(NavDrawer::default().state(), DrawerState::Closed);
        assert!(!compact().overlay_visible());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..8 {
            let drawer = (0..n).fold(compact(), |d, _| d.update(NavEvent::Toggle));
            let expected = if n % 2 == 0 {
                DrawerState::Closed
            } else {
                DrawerState::Open
            };
            assert_eq!(drawer.state(), expected, "after {} toggles", n);
        }
    }

    #[test]
    fn test_item_selected_closes() {
        let drawer = compact().update(NavEvent::Toggle).update(NavEvent::ItemSelected);
        assert_eq!(drawer.state(), DrawerState::Closed);

        // Selecting while already closed stays closed
        let drawer = compact().update(NavEvent::ItemSelected);
        assert_eq!(drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn test_dismiss_closes() {
        let drawer = compact().update(NavEvent::Toggle).update(NavEvent::Dismiss);
        assert_eq!(drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn test_wide_projection_preserves_state() {
        let open = compact().update(NavEvent::Toggle);
        assert!(open.overlay_visible());

        let wide = open.update(NavEvent::ViewportChanged(ViewportClass::Wide));
        assert_eq!(wide.state(), DrawerState::Open);
        assert!(!wide.overlay_visible());
        assert!(wide.inline_menu_visible());
        assert!(!wide.menu_button_visible());

        let back = wide.update(NavEvent::ViewportChanged(ViewportClass::Compact));
        assert_eq!(back.state(), DrawerState::Open);
        assert!(back.overlay_visible());
    }

    #[test]
    fn test_toggle_while_wide_has_no_visible_effect() {
        let wide = NavDrawer::new(ViewportClass::Wide).update(NavEvent::Toggle);
        assert_eq!(wide.state(), DrawerState::Open);
        assert!(!wide.overlay_visible());

        let compact = wide.update(NavEvent::ViewportChanged(ViewportClass::Compact));
        assert!(compact.overlay_visible());
    }

    #[test]
    fn test_apply_matches_update() {
        let mut drawer = compact();
        drawer.apply(NavEvent::Toggle);
        assert_eq!(drawer, compact().update(NavEvent::Toggle));
    }
}
