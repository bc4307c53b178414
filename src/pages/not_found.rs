//! Catch-all page for locations without a route.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{RouteName, RouteTable};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let routes = expect_context::<RouteTable>();
    let location = use_location();
    let home_href = routes.href_for(RouteName::Home).unwrap_or_else(|| "/".to_owned());
    let missing = move || {
        let pathname = location.pathname.get();
        let hash = location.hash.get();
        routes.routed_path(&pathname, &hash).to_owned()
    };

    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{missing}</code> "."</p>
            <A href=home_href>"Back to the start page"</A>
        </section>
    }
}
