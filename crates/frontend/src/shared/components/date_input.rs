use leptos::prelude::*;

/// Поле даты с нативным выбором.
/// Браузер показывает дату в формате локали (дд.мм.гггг для RU)
#[component]
pub fn DateInput(
    /// Значение в формате yyyy-mm-dd
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается при изменении (yyyy-mm-dd)
    on_change: impl Fn(String) + 'static,
    /// Минимальная дата, yyyy-mm-dd
    #[prop(into, optional)]
    min: Signal<Option<String>>,
    /// Подсветка поля с ошибкой
    #[prop(into, optional)]
    invalid: Signal<bool>,
) -> impl IntoView {
    let class = move || {
        if invalid.get() {
            "date-input date-input--invalid"
        } else {
            "date-input"
        }
    };

    view! {
        <input
            type="date"
            class=class
            prop:value=value
            min=move || min.get()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
