//! Order overview for administrators.
//!
//! The admin flag is advisory: the page renders for everyone and only adds a
//! notice when the session is not marked as admin.

#[cfg(test)]
#[path = "admin_orders_test.rs"]
mod admin_orders_test;

use leptos::prelude::*;

use crate::state::SessionSignal;
use crate::state::session::SessionState;

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let notice = move || session.with(|s| admin_notice(s.state()));

    view! {
        <section class="orders-page orders-page--admin">
            <h1>"All orders"</h1>
            {move || notice().map(|text| view! { <p class="notice">{text}</p> })}
            <p class="empty">"There are no orders to show."</p>
        </section>
    }
}

/// Notice shown to sessions that are not flagged as admin.
pub(crate) fn admin_notice(state: &SessionState) -> Option<&'static str> {
    if state.admin {
        None
    } else if state.is_logged_in() {
        Some("Your account is not marked as an administrator.")
    } else {
        Some("Sign in with an administrator account to manage orders.")
    }
}
