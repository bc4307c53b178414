//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::routes::RouteTable;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Provides config, the route table, and the restored session store as
/// contexts, then renders the page for the current location.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let routes = RouteTable::canonical(config.history);
    let session = RwSignal::new(SessionStore::restore(LocalStorage, config.session_key.clone()));

    provide_context(config);
    provide_context(routes);
    provide_context(session);

    view! {
        <Router>
            <NavBar/>
            <main class="page">
                <RoutedPage/>
            </main>
        </Router>
    }
}

/// Outlet rendering the route entry that matches the browser location.
#[component]
fn RoutedPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let routes = expect_context::<RouteTable>();
    let location = use_location();

    let current = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let hash = location.hash.get();
        *routes.resolve_location(&pathname, &hash)
    });

    view! {
        <Title text=move || config.document_title(current.get().title)/>
        {move || current.get().page.render()}
    }
}
