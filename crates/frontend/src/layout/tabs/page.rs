//! TabPage - обёртка контента одной вкладки.
//!
//! Контент создаётся один раз при открытии вкладки и живёт до её закрытия;
//! неактивные вкладки только скрываются, поэтому состояние форм сохраняется.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key;

    let is_active = Memo::new({
        let key = tab_key.clone();
        move |_| tabs_store.active.with(|active| active.as_deref() == Some(key.as_str()))
    });

    log!("🔨 TabPage CREATED for: '{}'", tab_key);
    {
        let key = tab_key.clone();
        on_cleanup(move || log!("💥 TabPage DESTROYED for: '{}'", key));
    }

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active.get()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
