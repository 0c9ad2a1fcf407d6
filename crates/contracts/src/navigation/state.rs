//! Visibility state of the navigation bar's two disclosure widgets.
//!
//! `NavState` is owned by a single bar instance and only changes through
//! [`NavState::apply`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavEvent {
    ProductsHoverStart,
    ProductsHoverEnd,
    /// Keyboard focus entered the products trigger region.
    ProductsFocusIn,
    /// Keyboard focus left the products trigger region.
    ProductsFocusOut,
    ToggleMobileMenu,
    CloseMobileMenu,
    /// A link inside the mobile panel was activated.
    MobileLinkActivated,
    Escape,
}

/// Glyph shown on the mobile menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGlyph {
    /// Hamburger; the panel is closed.
    Open,
    /// X; the panel is open.
    Close,
}

impl ToggleGlyph {
    pub fn icon_name(&self) -> &'static str {
        match self {
            ToggleGlyph::Open => "menu",
            ToggleGlyph::Close => "x",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            ToggleGlyph::Open => "Open menu",
            ToggleGlyph::Close => "Close menu",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub products_open: bool,
    pub mobile_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event`, returning `true` if anything changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let before = *self;
        match event {
            NavEvent::ProductsHoverStart | NavEvent::ProductsFocusIn => {
                self.products_open = true;
            }
            NavEvent::ProductsHoverEnd | NavEvent::ProductsFocusOut => {
                self.products_open = false;
            }
            NavEvent::ToggleMobileMenu => {
                self.mobile_open = !self.mobile_open;
            }
            NavEvent::CloseMobileMenu | NavEvent::MobileLinkActivated => {
                self.mobile_open = false;
            }
            NavEvent::Escape => {
                self.products_open = false;
                self.mobile_open = false;
            }
        }
        *self != before
    }

    pub fn toggle_glyph(&self) -> ToggleGlyph {
        if self.mobile_open {
            ToggleGlyph::Close
        } else {
            ToggleGlyph::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::links::{DESKTOP_LINKS, MOBILE_LINKS};

    fn after(events: &[NavEvent]) -> NavState {
        let mut state = NavState::new();
        for event in events {
            state.apply(*event);
        }
        state
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = NavState::new();
        assert!(!state.products_open);
        assert!(!state.mobile_open);
        assert_eq!(state.toggle_glyph(), ToggleGlyph::Open);
    }

    #[test]
    fn test_hover_round_trip() {
        let state = after(&[NavEvent::ProductsHoverStart]);
        assert!(state.products_open);
        let state = after(&[NavEvent::ProductsHoverStart, NavEvent::ProductsHoverEnd]);
        assert_eq!(state, NavState::new());
    }

    #[test]
    fn test_hover_leave_always_closes() {
        let mut state = after(&[NavEvent::ProductsHoverStart, NavEvent::ProductsFocusIn]);
        assert!(state.apply(NavEvent::ProductsHoverEnd));
        assert!(!state.products_open);
    }

    #[test]
    fn test_focus_opens_and_closes_dropdown() {
        let mut state = after(&[NavEvent::ProductsFocusIn]);
        assert!(state.products_open);
        assert!(state.apply(NavEvent::ProductsFocusOut));
        assert!(!state.products_open);
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut state = NavState::new();
        assert!(state.apply(NavEvent::ToggleMobileMenu));
        assert!(state.mobile_open);
        assert_eq!(state.toggle_glyph(), ToggleGlyph::Close);

        let labels: Vec<_> = MOBILE_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Products", "Industries", "Contact Us"]);

        assert!(state.apply(NavEvent::ToggleMobileMenu));
        assert!(!state.mobile_open);
        assert_eq!(state.toggle_glyph(), ToggleGlyph::Open);
    }

    #[test]
    fn test_every_mobile_link_closes_panel() {
        for _link in MOBILE_LINKS {
            let mut state = after(&[NavEvent::ToggleMobileMenu]);
            assert!(state.apply(NavEvent::MobileLinkActivated));
            assert!(!state.mobile_open);
        }
    }

    #[test]
    fn test_close_mobile_menu_is_forced() {
        let mut state = NavState::new();
        assert!(!state.apply(NavEvent::CloseMobileMenu));
        assert!(!state.mobile_open);
        state.apply(NavEvent::ToggleMobileMenu);
        assert!(state.apply(NavEvent::CloseMobileMenu));
        assert!(!state.mobile_open);
    }

    #[test]
    fn test_widgets_are_independent() {
        let state = after(&[
            NavEvent::ToggleMobileMenu,
            NavEvent::ProductsHoverStart,
            NavEvent::ProductsHoverEnd,
        ]);
        assert!(state.mobile_open);
        let state = after(&[
            NavEvent::ToggleMobileMenu,
            NavEvent::CloseMobileMenu,
            NavEvent::ProductsHoverStart,
        ]);
        assert!(state.products_open);
        assert!(!state.mobile_open);
    }

    #[test]
    fn test_escape_closes_everything() {
        let mut state = NavState {
            products_open: true,
            mobile_open: true,
        };
        assert!(state.apply(NavEvent::Escape));
        assert_eq!(state, NavState::new());
        assert!(!state.apply(NavEvent::Escape));
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut state = NavState::new();
        assert!(!state.apply(NavEvent::ProductsHoverEnd));
        assert!(state.apply(NavEvent::ProductsHoverStart));
        assert!(!state.apply(NavEvent::ProductsFocusIn));
    }

    #[test]
    fn test_desktop_link_set_is_fixed() {
        let labels: Vec<_> = DESKTOP_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[2], "Products");
    }

    #[test]
    fn test_state_serializes_for_logging() {
        let json = serde_json::to_string(&NavState::new()).unwrap();
        assert_eq!(json, r#"{"products_open":false,"mobile_open":false}"#);
    }
}
