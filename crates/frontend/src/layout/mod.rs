pub mod center;
pub mod global_context;
pub mod left;
pub mod notification_service;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use notification_service::NotificationHost;
use top_header::TopHeader;

pub use notification_service::{use_notifications, NotificationService};

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// |   (Left)  |    (Center)      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}
