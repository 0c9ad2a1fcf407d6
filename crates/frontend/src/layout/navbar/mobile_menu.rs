use crate::shared::components::AnimatedPresence;
use crate::shared::icons::icon;
use contracts::navigation::{NavEvent, NavState, MOBILE_LINKS};
use contracts::shared::motion;
use leptos::prelude::*;

/// Hamburger button shown below the desktop breakpoint.
#[component]
pub fn MobileMenuToggle(
    #[prop(into)] state: Signal<NavState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let glyph = move || state.get().toggle_glyph();

    view! {
        <button
            class="navbar__mobile-toggle"
            aria-label=move || glyph().aria_label()
            aria-expanded=move || if state.get().mobile_open { "true" } else { "false" }
            on:click=move |_| on_event.run(NavEvent::ToggleMobileMenu)
        >
            {move || icon(glyph().icon_name())}
        </button>
    }
}

/// Full-height panel sliding in from the right edge.
///
/// Every link closes the panel as part of the same click that navigates.
#[component]
pub fn MobileMenu(
    #[prop(into)] state: Signal<NavState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let close = move |_| on_event.run(NavEvent::CloseMobileMenu);

    view! {
        <AnimatedPresence
            when=Signal::derive(move || state.get().mobile_open)
            enter=motion::mobile_panel_enter()
            exit=motion::mobile_panel_exit()
            class="navbar__mobile-panel"
        >
            <div class="navbar__mobile-header">
                <span class="navbar__mobile-title">"Menu"</span>
                <button class="navbar__mobile-close" aria-label="Close menu" on:click=close>
                    {icon("x")}
                </button>
            </div>
            <div class="navbar__mobile-links">
                {MOBILE_LINKS
                    .iter()
                    .map(|link| {
                        let class = if link.is_call_to_action() {
                            "navbar__mobile-cta"
                        } else {
                            "navbar__mobile-link"
                        };
                        view! {
                            <a
                                href=link.path
                                class=class
                                on:click=move |_| on_event.run(NavEvent::MobileLinkActivated)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedPresence>
    }
}
