//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для агрегатов используются `ENTITY_LABELS` из contracts,
//! для юзкейсов - `UseCaseMetadata`, для дашбордов - хардкод.

use contracts::domain::a001_requisition::{Requisition, ENTITY_LABELS as A001};
use contracts::domain::a003_nomenclature::ENTITY_LABELS as A003;
use contracts::domain::a004_unit_of_measure::ENTITY_LABELS as A004;

/// Ключ домашней вкладки
pub const HOME_TAB_KEY: &str = "d400_overview";

/// Возвращает читаемый заголовок таба для данного ключа.
/// Fallback: пустая строка (вызывающий подставляет сам ключ).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_requisition" => A001.list_name,
        "a003_nomenclature" => A003.list_name,
        "a004_unit_of_measure" => A004.list_name,

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        HOME_TAB_KEY => "Главная",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Заявка", "REQ-0001")` → `"Заявка · REQ-0001"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Заголовок вкладки заявки: номер, а пока он не загружен - id
pub fn requisition_tab_label(number: Option<&str>, id: i64) -> String {
    match number.filter(|n| !n.is_empty()) {
        Some(number) => detail_tab_label(A001.element_name, number),
        None => detail_tab_label(A001.element_name, &format!("#{}", id)),
    }
}

/// Ключ и заголовок вкладки карточки для полученной от сервера заявки
pub fn requisition_detail_tab(requisition: &Requisition) -> (String, String) {
    (
        A001.detail_key(requisition.id),
        requisition_tab_label(Some(&requisition.number), requisition.id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::decode_response;
    use contracts::enums::RequisitionStatus;
    use serde_json::json;

    #[test]
    fn known_keys_have_labels() {
        assert_eq!(tab_label_for_key("a001_requisition"), "Заявки на закупку");
        assert_eq!(tab_label_for_key(HOME_TAB_KEY), "Главная");
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn requisition_label_prefers_number() {
        assert_eq!(requisition_tab_label(Some("REQ-7"), 7), "Заявка · REQ-7");
        assert_eq!(requisition_tab_label(Some(""), 7), "Заявка · #7");
        assert_eq!(requisition_tab_label(None, 12), "Заявка · #12");
    }

    #[test]
    fn created_requisition_opens_its_detail_tab() {
        let body = json!({
            "id": 42,
            "number": "REQ-0042",
            "status": "DRAFT",
            "organizerId": "user-123",
            "totalLotSumNoNds": 0
        })
        .to_string();
        let created: Requisition = decode_response(201, "Created", &body).unwrap();
        assert_eq!(created.status, RequisitionStatus::Draft);
        assert_eq!(created.organizer_id, "user-123");

        let (key, title) = requisition_detail_tab(&created);
        assert_eq!(key, "a001_requisition_detail_42");
        assert_eq!(title, "Заявка · REQ-0042");
        assert_eq!(A001.parse_detail_key(&key), Some("42"));
    }
}
