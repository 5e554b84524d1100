//! Нормализация HTTP-ответов бэкенда в `ApiResult`.
//!
//! Транспорт (gloo-net в браузере) отдаёт сюда статус, текст статуса и тело;
//! решение "успех или ошибка" и разбор тела принимаются только здесь.

use super::api_error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;

const NO_CONTENT: u16 = 204;

/// Статус в диапазоне 2xx
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Преобразует ответ в типизированный результат.
///
/// - 2xx и 204/пустое тело: значение `T` из JSON `null`, тело не разбирается
///   (`()` и `Option<_>` проходят, остальные типы дают `INVALID_RESPONSE`);
/// - 2xx с телом: JSON-декодирование `T`;
/// - иначе: `ApiError` из тела или синтетический `UNKNOWN_ERROR`.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> ApiResult<T> {
    if !is_success(status) {
        return Err(decode_failure(status, status_text, body));
    }

    if status == NO_CONTENT || body.trim().is_empty() {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| ApiError::invalid_response(status, format!("пустое тело: {}", e)));
    }

    serde_json::from_str(body).map_err(|e| ApiError::invalid_response(status, e))
}

/// Ошибка из тела не-2xx ответа.
pub fn decode_failure(status: u16, status_text: &str, body: &str) -> ApiError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.with_status(status),
        Err(_) => ApiError::unknown(status, status_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::api_error::{INVALID_RESPONSE, UNKNOWN_ERROR};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: i64,
    }

    #[test]
    fn test_success_body_is_decoded() {
        let sample: Sample = decode_response(200, "OK", r#"{"id": 5}"#).unwrap();
        assert_eq!(sample, Sample { id: 5 });
    }

    #[test]
    fn test_no_content_resolves_to_unit_without_parsing() {
        // Тело намеренно не JSON: для 204 оно не должно читаться вовсе
        let result: ApiResult<()> = decode_response(204, "No Content", "not json at all");
        assert_eq!(result, Ok(()));

        let result: ApiResult<Option<Sample>> = decode_response(200, "OK", "   ");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_empty_body_for_struct_is_invalid_response() {
        let err = decode_response::<Sample>(204, "No Content", "").unwrap_err();
        assert_eq!(err.error_code, INVALID_RESPONSE);
        assert_eq!(err.http_status, Some(204));
    }

    #[test]
    fn test_malformed_success_body_is_invalid_response() {
        let err = decode_response::<Sample>(200, "OK", "<html>oops</html>").unwrap_err();
        assert_eq!(err.error_code, INVALID_RESPONSE);
    }

    #[test]
    fn test_backend_error_passes_through_with_status() {
        let body = r#"{"errorCode":"OPTIMISTIC_LOCK_CONFLICT","message":"Version 3 is stale, current is 4","field":null,"rejectedValue":3}"#;
        let err = decode_response::<Sample>(409, "Conflict", body).unwrap_err();
        assert_eq!(err.error_code, "OPTIMISTIC_LOCK_CONFLICT");
        assert_eq!(err.http_status, Some(409));
        assert!(err.is_conflict());
        assert!(err.field.is_none());
    }

    #[test]
    fn test_every_failure_status_yields_api_error() {
        let bodies = ["", "<html>Bad gateway</html>", r#"{"timestamp":"x","status":500}"#, "null"];
        for status in [400u16, 401, 404, 409, 500, 502, 503] {
            for body in bodies {
                let err = decode_response::<Sample>(status, "Status", body).unwrap_err();
                assert_eq!(err.error_code, UNKNOWN_ERROR, "status {status}, body {body:?}");
                assert_eq!(err.message, format!("HTTP {}: Status", status));
                assert_eq!(err.http_status, Some(status));
            }
        }
    }

    #[test]
    fn test_redirect_status_is_not_success() {
        assert!(!is_success(304));
        assert!(is_success(201));
        let err = decode_response::<()>(304, "Not Modified", "").unwrap_err();
        assert_eq!(err.error_code, UNKNOWN_ERROR);
    }
}
