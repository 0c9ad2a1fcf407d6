//! Renders motion descriptors as CSS so the browser's animation engine can
//! play them.
//!
//! Each [`MotionSpec`] becomes one `@keyframes` block (keyed by its name) and
//! an inline `animation:` declaration carrying its timings.

use contracts::shared::motion::{self, Easing, FillMode, MotionSpec, MotionState, Offset};

fn easing_css(easing: Easing) -> &'static str {
    match easing {
        Easing::Linear => "linear",
        Easing::Ease => "ease",
        Easing::EaseIn => "ease-in",
        Easing::EaseOut => "ease-out",
        Easing::EaseInOut => "ease-in-out",
    }
}

fn fill_mode_css(fill: FillMode) -> &'static str {
    match fill {
        FillMode::Backwards => "backwards",
        FillMode::Both => "both",
    }
}

fn offset_css(offset: Offset) -> String {
    match offset {
        Offset::Px(value) => format!("{}px", value),
        Offset::Percent(value) => format!("{}%", value),
    }
}

fn state_css(state: &MotionState) -> String {
    format!(
        "opacity: {}; transform: translate({}, {}) scale({});",
        state.opacity,
        offset_css(state.x),
        offset_css(state.y),
        state.scale
    )
}

pub fn keyframes_css(spec: &MotionSpec) -> String {
    format!(
        "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
        spec.name,
        state_css(&spec.from),
        state_css(&spec.to)
    )
}

/// Inline style that plays `spec` once with its fill mode.
pub fn animation_style(spec: &MotionSpec) -> String {
    let transition = &spec.transition;
    format!(
        "animation: {} {}ms {} {}ms {};",
        spec.name,
        transition.duration_ms,
        easing_css(transition.easing),
        transition.delay_ms,
        fill_mode_css(spec.fill)
    )
}

/// `@keyframes` for every distinct spec name, in first-seen order.
pub fn stylesheet(specs: &[MotionSpec]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut blocks = Vec::new();
    for spec in specs {
        if seen.contains(&spec.name) {
            continue;
        }
        seen.push(spec.name);
        blocks.push(keyframes_css(spec));
    }
    blocks.join("\n")
}

/// Keyframes used by the navigation bar.
pub fn navbar_stylesheet() -> String {
    stylesheet(&[
        motion::bar_entrance(),
        motion::nav_link_entrance(0),
        motion::dropdown_enter(),
        motion::dropdown_exit(),
        motion::mobile_panel_enter(),
        motion::mobile_panel_exit(),
    ])
}
