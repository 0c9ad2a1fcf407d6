use crate::shared::components::AnimatedPresence;
use crate::shared::icons::icon;
use contracts::navigation::links::PRODUCTS_PATH;
use contracts::navigation::{NavEvent, NavState, PRODUCT_CATEGORIES};
use contracts::shared::motion;
use leptos::ev::FocusEvent;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// "Products" entry of the desktop bar: trigger button plus dropdown.
///
/// Hover and keyboard focus open the dropdown; leaving the region closes it.
/// There is no click-to-pin.
#[component]
pub fn ProductsMenu(
    label: &'static str,
    /// Entrance animation of this entry within the link row.
    style: String,
    #[prop(into)] state: Signal<NavState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let region = NodeRef::<html::Div>::new();
    let is_open = move || state.get().products_open;

    // focusout also fires when focus moves between the trigger and a
    // dropdown link; only a move outside the region counts.
    let on_focus_out = move |ev: FocusEvent| {
        let next = ev
            .related_target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let stays_inside = match (region.get_untracked(), next) {
            (Some(region), Some(next)) => region.contains(Some(&next)),
            _ => false,
        };
        if !stays_inside {
            on_event.run(NavEvent::ProductsFocusOut);
        }
    };

    view! {
        <div
            node_ref=region
            class="navbar__item navbar__products"
            style=style
            on:mouseenter=move |_| on_event.run(NavEvent::ProductsHoverStart)
            on:mouseleave=move |_| on_event.run(NavEvent::ProductsHoverEnd)
            on:focusin=move |_| on_event.run(NavEvent::ProductsFocusIn)
            on:focusout=on_focus_out
        >
            <button
                class="navbar__products-btn"
                class:navbar__products-btn--open=is_open
                aria-haspopup="true"
                aria-expanded=move || if is_open() { "true" } else { "false" }
            >
                <span>{label}</span>
                <span class="navbar__chevron" class:navbar__chevron--open=is_open>
                    {icon("chevron-down")}
                </span>
            </button>

            <ProductsDropdown open=Signal::derive(is_open) />
        </div>
    }
}

/// Category panel under the "Products" trigger.
#[component]
pub fn ProductsDropdown(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <AnimatedPresence
            when=open
            enter=motion::dropdown_enter()
            exit=motion::dropdown_exit()
            class="navbar__dropdown"
        >
            <div class="navbar__dropdown-list">
                {PRODUCT_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="navbar__dropdown-category">
                                <a
                                    href=category.href()
                                    class="navbar__dropdown-link"
                                    title=category.product_summary()
                                >
                                    <div class="navbar__dropdown-icon">
                                        {icon(category.icon.code())}
                                    </div>
                                    <div class="navbar__dropdown-text">
                                        <h3 class="navbar__dropdown-title">{category.title}</h3>
                                        <p class="navbar__dropdown-description">
                                            {category.description}
                                        </p>
                                    </div>
                                    <span class="navbar__dropdown-arrow">{icon("arrow-right")}</span>
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="navbar__dropdown-footer">
                    <a href=PRODUCTS_PATH class="navbar__dropdown-all">
                        "View All Products"
                        {icon("arrow-right")}
                    </a>
                </div>
            </div>
        </AnimatedPresence>
    }
}
