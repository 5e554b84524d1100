use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Ключ localStorage, под которым хранится токен Basic-авторизации
pub const TOKEN_STORAGE_KEY: &str = "skc_basic_token";

/// Учётные данные, подставляемые в форму входа по умолчанию
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Ответ эндпоинта "кто я"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl CurrentUser {
    /// Имя для шапки; пустой ответ сервера не должен давать пустую строку
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "пользователь"
        } else {
            &self.username
        }
    }
}

/// Токен для заголовка `Authorization: Basic <token>`
pub fn build_basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username.trim(), password))
}

pub fn authorization_header(token: &str) -> String {
    format!("Basic {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_token() {
        assert_eq!(build_basic_token("admin", "admin"), "YWRtaW46YWRtaW4=");
        assert_eq!(build_basic_token("  admin ", "admin"), "YWRtaW46YWRtaW4=");
        assert_eq!(
            authorization_header(&build_basic_token("admin", "admin")),
            "Basic YWRtaW46YWRtaW4="
        );
    }

    #[test]
    fn test_current_user_tolerates_partial_body() {
        let user: CurrentUser = serde_json::from_value(json!({ "username": "admin" })).unwrap();
        assert!(user.roles.is_empty());

        let user: CurrentUser = serde_json::from_value(json!({})).unwrap();
        assert_eq!(user.display_name(), "пользователь");
    }
}
