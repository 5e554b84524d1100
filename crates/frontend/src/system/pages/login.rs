use contracts::system::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(DEFAULT_USERNAME.to_string());
    let (password, set_password) = signal(DEFAULT_PASSWORD.to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Успешный вход выставляет токен сессии и переключает на MainLayout
            if let Err(e) = session.sign_in(&username_val, &password_val).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SKC Закупки"</h1>
                <h2>"Вход в SKC Закупки"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder=DEFAULT_USERNAME
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"По умолчанию:"</p>
                    <p>"Логин: " <strong>{DEFAULT_USERNAME}</strong></p>
                    <p>"Пароль: " <strong>{DEFAULT_PASSWORD}</strong></p>
                </div>
            </div>
        </div>
    }
}
