//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each route entry names a [`Page`]; the routed outlet in `app` renders it
//! through [`Page::render`]. Pages read the session from context and never
//! fetch data.


pub mod admin_orders;
pub mod home;
pub mod login;
pub mod menu;
pub mod not_found;
pub mod register;
pub mod user_orders;

use leptos::prelude::*;

use admin_orders::AdminOrdersPage;
use home::HomePage;
use login::LoginPage;
use menu::MenuPage;
use not_found::NotFoundPage;
use register::RegisterPage;
use user_orders::UserOrdersPage;

/// Page components a route can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Menu,
    Login,
    Register,
    UserOrders,
    AdminOrders,
    NotFound,
}

impl Page {
    pub fn render(self) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::Menu => view! { <MenuPage/> }.into_any(),
            Self::Login => view! { <LoginPage/> }.into_any(),
            Self::Register => view! { <RegisterPage/> }.into_any(),
            Self::UserOrders => view! { <UserOrdersPage/> }.into_any(),
            Self::AdminOrders => view! { <AdminOrdersPage/> }.into_any(),
            Self::NotFound => view! { <NotFoundPage/> }.into_any(),
        }
    }
}
