use crate::layout::NavigationBar;
use contracts::shared::brand::BrandConfig;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Fixed brand constants for everything below.
    provide_context(BrandConfig::default());

    // Router turns same-origin <a href> clicks into client-side navigation.
    view! {
        <Router>
            <NavigationBar />
        </Router>
    }
}
