//! Orders of the signed-in user.

#[cfg(test)]
#[path = "user_orders_test.rs"]
mod user_orders_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{RouteName, RouteTable};
use crate::state::SessionSignal;
use crate::state::session::SessionState;

#[component]
pub fn UserOrdersPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let routes = expect_context::<RouteTable>();
    let login_href = routes.href_for(RouteName::Login).unwrap_or_default();
    let logged_in = move || session.with(|s| s.is_logged_in());

    view! {
        <section class="orders-page">
            <h1>{move || session.with(|s| orders_heading(s.state()))}</h1>
            <Show
                when=logged_in
                fallback=move || {
                    view! {
                        <p class="notice">
                            <A href=login_href.clone()>"Sign in"</A>
                            " to see your orders."
                        </p>
                    }
                }
            >
                <p class="empty">"You have no orders yet."</p>
            </Show>
        </section>
    }
}

pub(crate) fn orders_heading(state: &SessionState) -> String {
    if state.is_logged_in() {
        format!("Orders for {}", state.username)
    } else {
        "My orders".to_owned()
    }
}
