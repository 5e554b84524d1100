use serde::{Deserialize, Serialize};

use crate::domain::a002_requisition_item::RequisitionItem;
use crate::domain::common::EntityLabels;
use crate::enums::RequisitionStatus;

pub const ENTITY_LABELS: EntityLabels = EntityLabels {
    index: "a001",
    collection: "requisition",
    element_name: "Заявка",
    list_name: "Заявки на закупку",
};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заявка на закупку (шапка)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: i64,

    /// Номер, присвоенный бэкендом
    pub number: String,

    pub status: RequisitionStatus,

    /// Организатор закупки
    pub organizer_id: String,

    /// Сумма лота без НДС, считается бэкендом
    #[serde(default)]
    pub total_lot_sum_no_nds: f64,

    #[serde(default)]
    pub created_from: Option<String>,

    #[serde(default)]
    pub updated_from: Option<String>,
}

impl Requisition {
    /// Позиции можно менять только в черновике
    pub fn items_editable(&self) -> bool {
        self.status.policy().items_editable
    }

    pub fn deletable(&self) -> bool {
        self.status.policy().deletable
    }
}

/// Заявка вместе со строками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionDetail {
    #[serde(flatten)]
    pub header: Requisition,

    #[serde(default)]
    pub items: Vec<RequisitionItem>,
}

impl RequisitionDetail {
    /// Первая строка по номеру; используется демонстрацией блокировок
    pub fn first_item(&self) -> Option<&RequisitionItem> {
        self.items.iter().min_by_key(|item| item.row_number)
    }

    /// Коды номенклатуры, уже занятые строками заявки
    pub fn used_nomenclature_codes(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.nomenclature_code.as_str())
            .collect()
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequisitionPayload {
    pub organizer_id: String,
}

impl CreateRequisitionPayload {
    /// Организатор без пробелов по краям; пустое значение не отправляется
    pub fn new(organizer_id: &str) -> Result<Self, String> {
        let organizer_id = organizer_id.trim();
        if organizer_id.is_empty() {
            return Err("Укажите организатора".to_string());
        }
        Ok(Self {
            organizer_id: organizer_id.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchRequisitionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPayload {
    pub target_status: RequisitionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_json() -> serde_json::Value {
        json!({
            "id": 12,
            "number": "REQ-2026-0012",
            "status": "DRAFT",
            "organizerId": "user-123",
            "totalLotSumNoNds": 150000.5,
            "createdFrom": "2026-10-01T09:00:00",
            "updatedFrom": null,
            "items": [
                {
                    "id": 101, "rowNumber": 2, "nomenclatureCode": "NOM-2",
                    "nomenclatureName": "Кабель", "quantity": 10, "unitCode": "M",
                    "priceWithoutVat": 500.0, "desiredDeliveryDate": "2026-11-01",
                    "comment": null, "version": 4
                },
                {
                    "id": 100, "rowNumber": 1, "nomenclatureCode": "NOM-1",
                    "nomenclatureName": "Бумага", "quantity": 3, "unitCode": "PCS",
                    "priceWithoutVat": 1200.0, "desiredDeliveryDate": null,
                    "comment": "срочно", "version": 0
                }
            ]
        })
    }

    #[test]
    fn test_detail_flattens_header() {
        let detail: RequisitionDetail = serde_json::from_value(detail_json()).unwrap();
        assert_eq!(detail.header.id, 12);
        assert_eq!(detail.header.status, RequisitionStatus::Draft);
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.first_item().map(|i| i.id), Some(100));
        assert_eq!(detail.used_nomenclature_codes(), vec!["NOM-2", "NOM-1"]);
        assert!(detail.header.items_editable());
    }

    #[test]
    fn test_list_entry_without_optional_fields() {
        let req: Requisition = serde_json::from_value(json!({
            "id": 1,
            "number": "REQ-1",
            "status": "CLOSED",
            "organizerId": "admin"
        }))
        .unwrap();
        assert_eq!(req.total_lot_sum_no_nds, 0.0);
        assert!(!req.items_editable());
        assert!(!req.deletable());
    }

    #[test]
    fn test_create_payload_for_user_123() {
        let payload = CreateRequisitionPayload::new("  user-123 ").unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "organizerId": "user-123" })
        );
        assert!(CreateRequisitionPayload::new("   ").is_err());
    }

    #[test]
    fn test_patch_payload_omits_absent_fields() {
        let empty = PatchRequisitionPayload::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));

        let transition = TransitionPayload {
            target_status: RequisitionStatus::InProcurement,
        };
        assert_eq!(
            serde_json::to_value(&transition).unwrap(),
            json!({ "targetStatus": "IN_PROCUREMENT" })
        );
    }

    #[test]
    fn test_labels_build_detail_key() {
        assert_eq!(ENTITY_LABELS.list_key(), "a001_requisition");
        assert_eq!(ENTITY_LABELS.detail_key(12), "a001_requisition_detail_12");
    }
}
