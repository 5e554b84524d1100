use crate::layout::global_context::AppGlobalContext;
use crate::layout::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toast notifications for mutation results
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ConfigProvider>
    }
}
