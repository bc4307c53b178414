//! Top navigation bar with session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the root component above the routed page. Which links
//! show depends on the session: guests get sign-in links, signed-in users get
//! their orders, and the admin link follows the advisory admin flag.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::routes::{RouteName, RouteTable};
use crate::state::SessionSignal;
use crate::state::session::SessionState;

/// A resolved navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: RouteName,
    pub href: String,
    pub label: &'static str,
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let routes = expect_context::<RouteTable>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let links_routes = routes.clone();
    let links = move || session.with(|s| nav_links(&links_routes, s.state()));

    let on_logout = move |_| {
        session.update(|store| store.logout());
        if let Some(href) = routes.href_for(RouteName::Home) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">{config.title}</span>
            <ul class="nav-bar__links">
                <For each=links key=|link| link.name let:link>
                    <li>
                        <A href=link.href>{link.label}</A>
                    </li>
                </For>
            </ul>
            <Show when=move || session.with(|s| s.is_logged_in())>
                <span class="nav-bar__user">
                    {move || session.with(|s| s.username().to_owned())}
                    {move || session.with(|s| s.is_admin()).then_some(" (admin)")}
                </span>
            </Show>
            <button
                class="nav-bar__logout"
                hidden=move || !session.with(|s| s.is_logged_in())
                on:click=on_logout
            >
                "Log out"
            </button>
        </nav>
    }
}

/// Links to show for `state`, in display order.
pub(crate) fn nav_links(routes: &RouteTable, state: &SessionState) -> Vec<NavLink> {
    let mut names = vec![RouteName::Home, RouteName::Menu];
    if state.is_logged_in() {
        names.push(RouteName::UserOrders);
    } else {
        names.extend([RouteName::Login, RouteName::Register]);
    }
    if state.admin {
        names.push(RouteName::AdminOrders);
    }

    names
        .into_iter()
        .filter_map(|name| {
            let entry = routes.entries().iter().find(|entry| entry.name == name)?;
            let href = routes.href_for(name)?;
            Some(NavLink { name, href, label: entry.title })
        })
        .collect()
}
