//! Menu page.

use leptos::prelude::*;

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <section class="menu-page">
            <h1>"Menu"</h1>
            <p class="empty">"No menu items are available right now."</p>
        </section>
    }
}
