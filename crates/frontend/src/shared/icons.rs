use leptos::prelude::*;

/// Names understood by [`icon`]; anything else renders the fallback glyph.
pub const ICON_NAMES: &[&str] = &[
    "chevron-down",
    "menu",
    "x",
    "factory",
    "package",
    "arrow-right",
];

pub fn has_icon(name: &str) -> bool {
    ICON_NAMES.contains(&name)
}

fn fallback_icon() -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <circle cx="12" cy="12" r="10"/>
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    if !has_icon(name) {
        log::warn!("unknown icon: {name}");
        return fallback_icon();
    }
    match name {
        "chevron-down" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="6 9 12 15 18 9"/>
            </svg>
        }.into_any(),
        "menu" => view! {
            <svg width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <line x1="4" x2="20" y1="6" y2="6"/>
                <line x1="4" x2="20" y1="12" y2="12"/>
                <line x1="4" x2="20" y1="18" y2="18"/>
            </svg>
        }.into_any(),
        "x" => view! {
            <svg width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            </svg>
        }.into_any(),
        "factory" => view! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"/>
                <path d="M17 18h1"/>
                <path d="M12 18h1"/>
                <path d="M7 18h1"/>
            </svg>
        }.into_any(),
        "package" => view! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="m7.5 4.27 9 5.15"/>
                <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/>
                <path d="m3.3 7 8.7 5 8.7-5"/>
                <path d="M12 22V12"/>
            </svg>
        }.into_any(),
        "arrow-right" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M5 12h14"/>
                <path d="m12 5 7 7-7 7"/>
            </svg>
        }.into_any(),
        _ => fallback_icon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::{ToggleGlyph, PRODUCT_CATEGORIES};

    #[test]
    fn test_category_icons_are_known() {
        for category in PRODUCT_CATEGORIES {
            assert!(has_icon(category.icon.code()), "{}", category.title);
        }
    }

    #[test]
    fn test_toggle_glyphs_are_known() {
        assert!(has_icon(ToggleGlyph::Open.icon_name()));
        assert!(has_icon(ToggleGlyph::Close.icon_name()));
        assert!(!has_icon("folder-open"));
    }

    #[test]
    fn test_icon_names_are_unique() {
        for (index, name) in ICON_NAMES.iter().enumerate() {
            assert!(!ICON_NAMES[index + 1..].contains(name), "{name}");
        }
    }
}
