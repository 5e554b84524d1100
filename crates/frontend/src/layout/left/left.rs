use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая зона с навигацией; скрывается кнопкой в шапке
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="left" class="left app-sidebar" class:hidden=move || !tabs_store.left_open.get()>
            {children()}
        </div>
    }
}
