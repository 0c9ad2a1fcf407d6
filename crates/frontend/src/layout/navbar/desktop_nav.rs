use super::ProductsMenu;
use crate::shared::motion_css::animation_style;
use contracts::navigation::{NavEvent, NavLinkKind, NavState, DESKTOP_LINKS};
use contracts::shared::motion;
use leptos::prelude::*;

/// Desktop link row. Links enter one after another; plain links grow an
/// accent underline on hover.
#[component]
pub fn DesktopNav(
    #[prop(into)] state: Signal<NavState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    view! {
        <div class="navbar__desktop">
            {DESKTOP_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    let style = animation_style(&motion::nav_link_entrance(index));
                    match link.kind {
                        NavLinkKind::ProductsTrigger => view! {
                            <ProductsMenu
                                label=link.label
                                style=style
                                state=state
                                on_event=on_event
                            />
                        }
                        .into_any(),
                        NavLinkKind::CallToAction => view! {
                            <div class="navbar__item" style=style>
                                <a href=link.path class="navbar__cta">
                                    {link.label}
                                </a>
                            </div>
                        }
                        .into_any(),
                        NavLinkKind::Plain => view! {
                            <div class="navbar__item" style=style>
                                <a href=link.path class="navbar__link">
                                    {link.label}
                                    <span class="navbar__underline"></span>
                                </a>
                            </div>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
        </div>
    }
}
