use super::{DesktopNav, MobileMenu, MobileMenuToggle};
use crate::shared::motion_css::{animation_style, navbar_stylesheet};
use contracts::navigation::{NavEvent, NavState};
use contracts::shared::brand::BrandConfig;
use contracts::shared::motion;
use leptos::prelude::*;

/// Sticky site header: logo, desktop links with the products dropdown, and
/// the mobile menu toggle plus its slide-in panel.
///
/// Both disclosure widgets start closed on every mount.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let brand = use_context::<BrandConfig>().unwrap_or_default();

    let state = RwSignal::new(NavState::new());

    let dispatch = Callback::new(move |event: NavEvent| {
        state.maybe_update(|nav| {
            let changed = nav.apply(event);
            if changed {
                log::debug!(
                    "navbar {:?} -> {}",
                    event,
                    serde_json::to_string(nav).unwrap_or_default()
                );
            }
            changed
        });
    });

    // Escape closes whatever is open.
    let keydown = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            dispatch.run(NavEvent::Escape);
        }
    });
    on_cleanup(move || keydown.remove());

    let nav_style = format!(
        "{} {}",
        brand.css_variables(),
        animation_style(&motion::bar_entrance())
    );

    view! {
        <nav class="navbar" style=nav_style>
            <style>{navbar_stylesheet()}</style>
            <div class="navbar__container">
                <div class="navbar__row">
                    <a href="/" class="navbar__logo">
                        <img
                            class="navbar__logo-image"
                            src=brand.logo_src
                            alt=brand.logo_alt
                            width=brand.logo_width.to_string()
                            height=brand.logo_height.to_string()
                        />
                        <span class="navbar__brand">{brand.site_name}</span>
                    </a>

                    <DesktopNav state=state on_event=dispatch />

                    <MobileMenuToggle state=state on_event=dispatch />
                </div>
            </div>

            <MobileMenu state=state on_event=dispatch />
        </nav>
    }
}
