use contracts::domain::common::ApiError;
use leptos::prelude::*;
use thaw::*;

/// Подробности ошибки API внутри страницы: код, сообщение, поле и отклонённое значение
#[component]
pub fn ApiErrorAlert(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            let field = err.field.clone().map(|f| {
                view! { <div class="api-error__field">"Поле: " <code>{f}</code></div> }
            });
            let rejected = err.rejected_value_text().map(|v| {
                view! { <div class="api-error__rejected">"Отклонённое значение: " <code>{v}</code></div> }
            });

            view! {
                <div class="api-error">
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>
                            <MessageBarTitle>{err.error_code.clone()}</MessageBarTitle>
                            <div>{err.message.clone()}</div>
                            {field}
                            {rejected}
                        </MessageBarBody>
                    </MessageBar>
                </div>
            }
        })
    }
}
