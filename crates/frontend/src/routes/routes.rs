use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{install_session_guard, RequireAuth};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();

    // Runs once when the layout is created: restores `?active=` and
    // starts probing the session on every tab switch.
    tabs_store.init_router_integration();
    install_session_guard(session, tabs_store);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=ViewFn::from(|| view! { <LoginPage /> })>
            <MainLayout />
        </RequireAuth>
    }
}
