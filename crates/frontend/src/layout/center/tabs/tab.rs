use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::HOME_TAB_KEY;
use leptos::ev;
use leptos::prelude::*;

/// Заголовок одной вкладки; домашнюю вкладку закрыть нельзя
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
    });
    let closable = tab.key != HOME_TAB_KEY;

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    let title = tab.title.clone();

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=title>
            <span>{tab.title}</span>
            {closable.then(|| view! {
                <button class="tab-close" on:click=on_close>"×"</button>
            })}
        </div>
    }
}
