//! Declarative animation descriptors.
//!
//! A [`MotionSpec`] names a transition between two visual states. The
//! interpolation itself belongs to whatever engine renders it (the browser's
//! CSS animations in the frontend); this module only holds timings and
//! endpoints.

use serde::Serialize;

/// Entrance stagger between consecutive desktop links.
pub const NAV_LINK_STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Translation along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Offset {
    Px(f32),
    /// Percentage of the element's own size.
    Percent(f32),
}

impl Offset {
    pub const ZERO: Offset = Offset::Px(0.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionState {
    pub opacity: f32,
    pub x: Offset,
    pub y: Offset,
    pub scale: f32,
}

impl MotionState {
    /// Fully visible, untransformed.
    pub const REST: MotionState = MotionState {
        opacity: 1.0,
        x: Offset::ZERO,
        y: Offset::ZERO,
        scale: 1.0,
    };

    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    pub const fn with_x(self, x: Offset) -> Self {
        Self { x, ..self }
    }

    pub const fn with_y(self, y: Offset) -> Self {
        Self { y, ..self }
    }

    pub const fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Time from start until the animation has settled.
    pub fn total_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

/// Which endpoint styles apply outside the active animation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// `from` applies during the delay; nothing is kept once finished.
    Backwards,
    /// `from` during the delay and `to` held after the end.
    Both,
}

/// Named transition `from` → `to`.
///
/// Specs sharing a `name` must share endpoints; only timings may differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSpec {
    pub name: &'static str,
    pub from: MotionState,
    pub to: MotionState,
    pub transition: Transition,
    pub fill: FillMode,
}

/// The whole bar drops in from above on mount.
///
/// Fills backwards only: a transform held on the bar would make it the
/// containing block for the fixed mobile panel.
pub fn bar_entrance() -> MotionSpec {
    MotionSpec {
        name: "nav-bar-enter",
        from: MotionState::REST.with_y(Offset::Px(-100.0)),
        to: MotionState::REST,
        transition: Transition::new(500, Easing::EaseOut),
        fill: FillMode::Backwards,
    }
}

/// Desktop link entrance, delayed by the link's position in the bar.
pub fn nav_link_entrance(index: usize) -> MotionSpec {
    MotionSpec {
        name: "nav-link-enter",
        from: MotionState::REST
            .with_opacity(0.0)
            .with_y(Offset::Px(-20.0)),
        to: MotionState::REST,
        transition: Transition::new(300, Easing::EaseOut)
            .delayed(index as u32 * NAV_LINK_STAGGER_MS),
        fill: FillMode::Both,
    }
}

const DROPDOWN_HIDDEN: MotionState = MotionState::REST
    .with_opacity(0.0)
    .with_y(Offset::Px(-10.0))
    .with_scale(0.95);

pub fn dropdown_enter() -> MotionSpec {
    MotionSpec {
        name: "nav-dropdown-enter",
        from: DROPDOWN_HIDDEN,
        to: MotionState::REST,
        transition: Transition::new(200, Easing::Ease),
        fill: FillMode::Both,
    }
}

pub fn dropdown_exit() -> MotionSpec {
    MotionSpec {
        name: "nav-dropdown-exit",
        from: MotionState::REST,
        to: DROPDOWN_HIDDEN,
        transition: Transition::new(150, Easing::Ease),
        fill: FillMode::Both,
    }
}

const PANEL_OFFSCREEN: MotionState = MotionState::REST.with_x(Offset::Percent(100.0));

pub fn mobile_panel_enter() -> MotionSpec {
    MotionSpec {
        name: "nav-mobile-panel-enter",
        from: PANEL_OFFSCREEN,
        to: MotionState::REST,
        transition: Transition::new(300, Easing::EaseOut),
        fill: FillMode::Both,
    }
}

pub fn mobile_panel_exit() -> MotionSpec {
    MotionSpec {
        name: "nav-mobile-panel-exit",
        from: MotionState::REST,
        to: PANEL_OFFSCREEN,
        transition: Transition::new(300, Easing::EaseOut),
        fill: FillMode::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_stagger() {
        assert_eq!(nav_link_entrance(0).transition.delay_ms, 0);
        assert_eq!(nav_link_entrance(1).transition.delay_ms, 100);
        assert_eq!(nav_link_entrance(4).transition.delay_ms, 400);
        assert_eq!(nav_link_entrance(4).transition.total_ms(), 700);
        assert_eq!(nav_link_entrance(0).name, nav_link_entrance(3).name);
    }

    #[test]
    fn test_dropdown_exit_is_faster_than_enter() {
        assert_eq!(dropdown_enter().transition.duration_ms, 200);
        assert_eq!(dropdown_exit().transition.duration_ms, 150);
        assert_eq!(dropdown_enter().from, dropdown_exit().to);
    }

    #[test]
    fn test_mobile_panel_slides_from_right() {
        let enter = mobile_panel_enter();
        assert_eq!(enter.from.x, Offset::Percent(100.0));
        assert_eq!(enter.to, MotionState::REST);
        assert_eq!(enter.transition.duration_ms, 300);
        assert_eq!(enter.transition.easing, Easing::EaseOut);
        assert_eq!(mobile_panel_exit().to.x, Offset::Percent(100.0));
    }

    #[test]
    fn test_bar_entrance() {
        let spec = bar_entrance();
        assert_eq!(spec.from.y, Offset::Px(-100.0));
        assert_eq!(spec.from.opacity, 1.0);
        assert_eq!(spec.transition.duration_ms, 500);
        assert_eq!(spec.fill, FillMode::Backwards);
    }

    #[test]
    fn test_widget_animations_hold_end_state() {
        assert_eq!(nav_link_entrance(2).fill, FillMode::Both);
        assert_eq!(dropdown_exit().fill, FillMode::Both);
        assert_eq!(mobile_panel_exit().fill, FillMode::Both);
    }
}
