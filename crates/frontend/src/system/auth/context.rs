use contracts::system::auth::{build_basic_token, CurrentUser};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_client::ApiClient;

/// Сообщение при неудачном входе; подробности ответа сервера не показываются
pub const LOGIN_FAILED_MESSAGE: &str = "Неверный логин или пароль";

/// Сессия пользователя: Basic-токен и данные "кто я".
/// Предоставляется в корне приложения, все запросы строятся через `client()`.
#[derive(Clone, Copy)]
pub struct Session {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<CurrentUser>>,
}

impl Session {
    /// Восстановить токен из localStorage
    pub fn restore() -> Self {
        let token = storage::get_token();
        if token.is_some() {
            log::info!("🔑 Session restored from storage");
        }
        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Клиент API с текущим токеном; ответ 401 завершает сессию
    pub fn client(&self) -> ApiClient {
        let session = *self;
        ApiClient::new(self.token.get_untracked())
            .with_unauthorized_handler(Callback::new(move |_| session.clear()))
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<(), String> {
        let token = build_basic_token(username, password);
        storage::save_token(&token);

        let candidate = ApiClient::new(Some(token.clone()));
        match api::fetch_current_user(&candidate).await {
            Ok(user) => {
                log::info!("✅ Signed in as {}", user.display_name());
                self.user.set(Some(user));
                self.token.set(Some(token));
                Ok(())
            }
            Err(err) => {
                log::warn!("Sign in failed: {}", err);
                self.clear();
                Err(LOGIN_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// Проверка "кто я" для уже сохранённого токена
    pub async fn verify(&self) {
        if self.token.get_untracked().is_none() {
            return;
        }
        match api::fetch_current_user(&self.client()).await {
            Ok(user) => self.user.set(Some(user)),
            Err(err) => {
                log::warn!("Session check failed: {}", err);
                self.clear();
            }
        }
    }

    pub fn clear(&self) {
        storage::clear_token();
        self.token.set(None);
        self.user.set(None);
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(Session::restore());
    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
