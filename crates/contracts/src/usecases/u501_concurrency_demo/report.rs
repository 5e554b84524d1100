use crate::domain::a002_requisition_item::{PatchItemPayload, RequisitionItem};
use crate::domain::common::{ApiError, ApiResult};

/// Один из двух параллельных запросов демонстрации
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAttempt {
    /// Номер запроса, начиная с 1
    pub ordinal: usize,
    pub target_quantity: i64,
    pub payload: PatchItemPayload,
}

impl DemoAttempt {
    /// Два изменения количества (+1 и +2) с одной и той же версией строки
    pub fn plan(item: &RequisitionItem) -> Vec<DemoAttempt> {
        (1..=2)
            .map(|ordinal| {
                let target_quantity = item.quantity + ordinal as i64;
                DemoAttempt {
                    ordinal,
                    target_quantity,
                    payload: PatchItemPayload::quantity_only(target_quantity, item.version),
                }
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("Запрос #{} (кол-во → {})", self.ordinal, self.target_quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Succeeded { new_version: i64 },
    Conflict(ApiError),
    Failed(ApiError),
}

impl AttemptOutcome {
    pub fn from_result(result: ApiResult<RequisitionItem>) -> Self {
        match result {
            Ok(item) => AttemptOutcome::Succeeded {
                new_version: item.version,
            },
            Err(err) if err.is_conflict() => AttemptOutcome::Conflict(err),
            Err(err) => AttemptOutcome::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Succeeded { .. })
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            AttemptOutcome::Succeeded { .. } => None,
            AttemptOutcome::Conflict(err) | AttemptOutcome::Failed(err) => Some(err),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AttemptOutcome::Succeeded { new_version } => {
                format!("Успешно — новая версия: {}", new_version)
            }
            AttemptOutcome::Conflict(err) => with_reason("Ошибка — конфликт версий", err),
            AttemptOutcome::Failed(err) => with_reason("Ошибка", err),
        }
    }

    /// Код ошибки и HTTP-статус, если ответ от сервера был
    pub fn code_line(&self) -> Option<String> {
        let err = self.error()?;
        Some(match err.http_status {
            Some(status) => format!("{} (HTTP {})", err.error_code, status),
            None => err.error_code.clone(),
        })
    }
}

fn with_reason(headline: &str, err: &ApiError) -> String {
    if err.message.trim().is_empty() {
        headline.to_string()
    } else {
        format!("{}: {}", headline, err.message)
    }
}

/// Итог демонстрации: исход каждого запроса в порядке отправки
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub entries: Vec<(DemoAttempt, AttemptOutcome)>,
}

impl DemoReport {
    pub fn from_results(
        attempts: Vec<DemoAttempt>,
        results: Vec<ApiResult<RequisitionItem>>,
    ) -> Self {
        let entries = attempts
            .into_iter()
            .zip(results)
            .map(|(attempt, result)| (attempt, AttemptOutcome::from_result(result)))
            .collect();
        Self { entries }
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn conflict_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, AttemptOutcome::Conflict(_)))
            .count()
    }

    /// Ожидаемый результат: ровно один успех и ровно один конфликт
    pub fn is_expected(&self) -> bool {
        self.entries.len() == 2 && self.success_count() == 1 && self.conflict_count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(version: i64) -> RequisitionItem {
        RequisitionItem {
            id: 100,
            row_number: 1,
            nomenclature_code: "NOM-1".into(),
            nomenclature_name: "Бумага".into(),
            quantity: 10,
            unit_code: "PCS".into(),
            price_without_vat: 100.0,
            desired_delivery_date: None,
            comment: None,
            version,
        }
    }

    fn stale_conflict() -> ApiError {
        ApiError::new(
            "OPTIMISTIC_LOCK_CONFLICT",
            "Item 100 was modified: expected version 3, current 4",
        )
        .with_status(409)
    }

    #[test]
    fn test_plan_uses_same_stale_version() {
        let attempts = DemoAttempt::plan(&item(3));
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].payload, PatchItemPayload::quantity_only(11, 3));
        assert_eq!(attempts[1].payload, PatchItemPayload::quantity_only(12, 3));
        assert_eq!(attempts[1].label(), "Запрос #2 (кол-во → 12)");
    }

    #[test]
    fn test_one_success_one_conflict_in_either_order() {
        let winner = RequisitionItem {
            quantity: 11,
            ..item(4)
        };

        let first_wins = DemoReport::from_results(
            DemoAttempt::plan(&item(3)),
            vec![Ok(winner.clone()), Err(stale_conflict())],
        );
        assert!(first_wins.is_expected());
        assert_eq!(
            first_wins.entries[0].1,
            AttemptOutcome::Succeeded { new_version: 4 }
        );
        assert_eq!(first_wins.entries[0].1.message(), "Успешно — новая версия: 4");

        let second_wins = DemoReport::from_results(
            DemoAttempt::plan(&item(3)),
            vec![Err(stale_conflict()), Ok(winner)],
        );
        assert!(second_wins.is_expected());
        assert_eq!(
            second_wins.entries[0].1.message(),
            "Ошибка — конфликт версий: Item 100 was modified: expected version 3, current 4"
        );
    }

    #[test]
    fn test_stale_version_is_reported_as_conflict_without_new_version() {
        let outcome = AttemptOutcome::from_result(Err(stale_conflict()));
        assert!(!outcome.is_success());
        assert_eq!(outcome.error().map(|e| e.http_status), Some(Some(409)));
    }

    #[test]
    fn test_conflict_shows_backend_message_and_code() {
        let outcome = AttemptOutcome::from_result(Err(ApiError::new(
            "OPTIMISTIC_LOCK_CONFLICT",
            "expected version 3, current 4",
        )
        .with_status(409)));
        assert!(outcome.message().contains("expected version 3"));
        assert_eq!(
            outcome.code_line().as_deref(),
            Some("OPTIMISTIC_LOCK_CONFLICT (HTTP 409)")
        );

        let blank = AttemptOutcome::Conflict(ApiError::new("VERSION_CONFLICT", "").with_status(409));
        assert_eq!(blank.message(), "Ошибка — конфликт версий");
    }

    #[test]
    fn test_network_failure_has_no_http_status() {
        let outcome = AttemptOutcome::from_result(Err(ApiError::transport("Failed to fetch")));
        assert_eq!(outcome.message(), "Ошибка: Failed to fetch");
        assert_eq!(outcome.code_line().as_deref(), Some("NETWORK_ERROR"));
        assert!(AttemptOutcome::Succeeded { new_version: 2 }.code_line().is_none());
    }

    #[test]
    fn test_other_failures_are_not_conflicts() {
        let report = DemoReport::from_results(
            DemoAttempt::plan(&item(0)),
            vec![
                Err(ApiError::transport("Failed to fetch")),
                Err(ApiError::unknown(500, "Internal Server Error")),
            ],
        );
        assert!(!report.is_expected());
        assert_eq!(report.conflict_count(), 0);
        assert!(matches!(report.entries[1].1, AttemptOutcome::Failed(_)));
    }
}
