//! Registration page.
//!
//! Registering signs the new user in as a regular (non-admin) account and
//! returns to the start page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{RouteName, RouteTable};
use crate::state::SessionSignal;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let routes = expect_context::<RouteTable>();
    let navigate = use_navigate();
    let login_href = routes.href_for(RouteName::Login).unwrap_or_default();

    let username = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        session.update(|store| store.login(name, false));
        if let Some(href) = routes.href_for(RouteName::Home) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <section class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Register"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href=login_href>"Sign in"</A>
                </p>
            </div>
        </section>
    }
}
