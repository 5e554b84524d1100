use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{use_session, Session};
use crate::layout::global_context::AppGlobalContext;

/// Проверять сессию при каждой смене активной вкладки
pub fn install_session_guard(session: Session, tabs_store: AppGlobalContext) {
    Effect::new(move |_| {
        let active = tabs_store.active.get();
        if session.token.get_untracked().is_none() {
            return;
        }
        log::debug!("🛡️ Session guard on navigation: {:?}", active);
        spawn_local(async move {
            session.verify().await;
        });
    });
}

/// Показывает содержимое только при активной сессии
#[component]
pub fn RequireAuth(fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
