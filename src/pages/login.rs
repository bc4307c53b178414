//! Login page writing the caller-supplied identity into the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no credential check on the client: whatever username and admin
//! flag the form holds are handed to `SessionStore::login` as-is, then the
//! user is sent to the orders view matching the flag.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{RouteName, RouteTable};
use crate::state::SessionSignal;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let routes = expect_context::<RouteTable>();
    let navigate = use_navigate();
    let register_href = routes.href_for(RouteName::Register).unwrap_or_default();

    let username = RwSignal::new(String::new());
    let admin = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let is_admin = admin.get();
        let name = username.get();
        session.update(|store| store.login(name, is_admin));
        if let Some(href) = routes.href_for(landing_after_login(is_admin)) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <section class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || admin.get()
                            on:change=move |ev| admin.set(event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href=register_href>"Register"</A>
                </p>
            </div>
        </section>
    }
}

/// Route shown right after a successful login.
pub(crate) fn landing_after_login(admin: bool) -> RouteName {
    if admin { RouteName::AdminOrders } else { RouteName::UserOrders }
}
