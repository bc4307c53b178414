//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{RouteName, RouteTable};
use crate::state::SessionSignal;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let routes = expect_context::<RouteTable>();
    let menu_href = routes.href_for(RouteName::Menu).unwrap_or_default();

    view! {
        <section class="home-page">
            <h1>{move || session.with(|s| greeting(s.state()))}</h1>
            <p>"Browse the menu and keep track of your orders."</p>
            <A href=menu_href attr:class="button">"See the menu"</A>
        </section>
    }
}

/// Heading text for the current session.
pub(crate) fn greeting(state: &SessionState) -> String {
    if state.is_logged_in() {
        format!("Welcome back, {}", state.username)
    } else {
        "Welcome, guest".to_owned()
    }
}
