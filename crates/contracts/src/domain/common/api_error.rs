use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Результат любого вызова API: успех или нормализованная ошибка
pub type ApiResult<T> = Result<T, ApiError>;

/// Ответ не удалось разобрать как ошибку API (не JSON или чужая форма)
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
/// Запрос не дошёл до сервера (fetch отклонён браузером, сеть недоступна)
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Успешный статус, но тело не соответствует ожидаемому типу
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
/// Тело запроса не удалось сериализовать, запрос не отправлялся
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Единая форма ошибки, которую бэкенд возвращает на любой не-2xx ответ.
///
/// Клиент гарантирует, что наружу уходит только этот тип: сетевые сбои и
/// нераспознанные тела ответов приводятся к нему же.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{error_code}: {message}")]
pub struct ApiError {
    /// Машинный код ошибки, например "VALIDATION_ERROR"
    pub error_code: String,

    /// Человекочитаемое описание; `null` от бэкенда читается как пустая строка
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,

    /// Имя поля запроса, вызвавшего ошибку (если применимо)
    #[serde(default)]
    pub field: Option<String>,

    /// Отклонённое значение поля
    #[serde(default)]
    pub rejected_value: Option<serde_json::Value>,

    /// HTTP-статус ответа; заполняется клиентом, в JSON не передаётся
    #[serde(skip)]
    pub http_status: Option<u16>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiError {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            field: None,
            rejected_value: None,
            http_status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Сетевой сбой: ответа от сервера нет
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(NETWORK_ERROR, message)
    }

    /// Не-2xx ответ с телом, которое не является ошибкой API
    pub fn unknown(status: u16, status_text: &str) -> Self {
        Self::new(UNKNOWN_ERROR, format!("HTTP {}: {}", status, status_text)).with_status(status)
    }

    /// 2xx ответ, тело которого не удалось привести к ожидаемому типу
    pub fn invalid_response(status: u16, detail: impl std::fmt::Display) -> Self {
        Self::new(
            INVALID_RESPONSE,
            format!("Некорректный ответ сервера (HTTP {}): {}", status, detail),
        )
        .with_status(status)
    }

    pub fn invalid_request(detail: impl std::fmt::Display) -> Self {
        Self::new(
            INVALID_REQUEST,
            format!("Не удалось сформировать запрос: {}", detail),
        )
    }

    /// Конфликт версий при оптимистичной блокировке
    pub fn is_conflict(&self) -> bool {
        if self.http_status == Some(409) {
            return true;
        }
        let code = self.error_code.to_ascii_uppercase();
        code.contains("CONFLICT") || code.contains("OPTIMISTIC") || code.contains("VERSION")
    }

    /// Сервер не принял учётные данные
    pub fn is_unauthorized(&self) -> bool {
        self.http_status == Some(401) || self.error_code.eq_ignore_ascii_case("UNAUTHORIZED")
    }

    pub fn is_not_found(&self) -> bool {
        self.http_status == Some(404) || self.error_code.to_ascii_uppercase().contains("NOT_FOUND")
    }

    pub fn is_network(&self) -> bool {
        self.error_code == NETWORK_ERROR
    }

    /// Отклонённое значение в виде текста для показа пользователю.
    /// Строки выводятся без кавычек, `null` считается отсутствием значения.
    pub fn rejected_value_text(&self) -> Option<String> {
        match self.rejected_value.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_error() {
        let err: ApiError = serde_json::from_value(json!({
            "errorCode": "VALIDATION_ERROR",
            "message": "Количество должно быть не меньше 1",
            "field": "quantity",
            "rejectedValue": 0
        }))
        .unwrap();

        assert_eq!(err.error_code, "VALIDATION_ERROR");
        assert_eq!(err.field.as_deref(), Some("quantity"));
        assert_eq!(err.rejected_value_text().as_deref(), Some("0"));
        assert_eq!(err.http_status, None);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let err: ApiError = serde_json::from_value(json!({
            "errorCode": "NOT_FOUND",
            "message": "Requisition 7 not found",
            "field": null,
            "rejectedValue": null
        }))
        .unwrap();

        assert!(err.field.is_none());
        assert!(err.rejected_value_text().is_none());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_null_message_keeps_error_code() {
        let err: ApiError = serde_json::from_value(json!({
            "errorCode": "VERSION_CONFLICT",
            "message": null
        }))
        .unwrap();
        assert_eq!(err.error_code, "VERSION_CONFLICT");
        assert_eq!(err.message, "");

        let err = crate::domain::common::decode_failure(
            409,
            "Conflict",
            r#"{"errorCode":"VERSION_CONFLICT","message":null}"#,
        );
        assert_eq!(err.error_code, "VERSION_CONFLICT");
        assert_eq!(err.http_status, Some(409));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_conflict_detection() {
        assert!(ApiError::new("OPTIMISTIC_LOCK_CONFLICT", "stale").is_conflict());
        assert!(ApiError::new("VERSION_MISMATCH", "stale").is_conflict());
        assert!(ApiError::new("ANY", "stale").with_status(409).is_conflict());
        assert!(!ApiError::new("VALIDATION_ERROR", "bad").with_status(400).is_conflict());
    }

    #[test]
    fn test_rejected_string_is_unquoted() {
        let mut err = ApiError::new("VALIDATION_ERROR", "bad unit").with_field("unitCode");
        err.rejected_value = Some(json!("KG"));
        assert_eq!(err.rejected_value_text().as_deref(), Some("KG"));
    }

    #[test]
    fn test_display_and_constructors() {
        let err = ApiError::unknown(502, "Bad Gateway");
        assert_eq!(err.error_code, UNKNOWN_ERROR);
        assert_eq!(err.message, "HTTP 502: Bad Gateway");
        assert_eq!(err.to_string(), "UNKNOWN_ERROR: HTTP 502: Bad Gateway");

        let err = ApiError::transport("Failed to fetch");
        assert!(err.is_network());
        assert_eq!(err.http_status, None);
    }
}
