use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка заявки. `version` нужна для оптимистичной блокировки:
/// любое изменение строки отправляет последнюю увиденную версию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionItem {
    pub id: i64,
    pub row_number: i32,
    pub nomenclature_code: String,
    pub nomenclature_name: String,
    pub quantity: i64,
    pub unit_code: String,
    pub price_without_vat: f64,
    #[serde(default)]
    pub desired_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub comment: Option<String>,
    pub version: i64,
}

impl RequisitionItem {
    /// Сумма строки для отображения; итоги заявки берутся из summary
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.price_without_vat
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    pub nomenclature_code: String,
    pub nomenclature_name: String,
    pub quantity: i64,
    pub unit_code: String,
    pub price_without_vat: f64,
    pub desired_delivery_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Частичное изменение строки. `version` обязательна всегда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub version: i64,
}

impl PatchItemPayload {
    /// Изменение только количества, как делает демонстрация блокировок
    pub fn quantity_only(quantity: i64, version: i64) -> Self {
        Self {
            quantity: Some(quantity),
            desired_delivery_date: None,
            comment: None,
            version,
        }
    }
}

/// Пустой комментарий из формы не отправляется
pub fn normalize_comment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_amount() {
        let item: RequisitionItem = serde_json::from_value(json!({
            "id": 1, "rowNumber": 1, "nomenclatureCode": "NOM-1",
            "nomenclatureName": "Бумага", "quantity": 3, "unitCode": "PCS",
            "priceWithoutVat": 1200.5, "desiredDeliveryDate": "2026-11-20",
            "comment": null, "version": 2
        }))
        .unwrap();
        assert_eq!(item.amount(), 3601.5);
        assert_eq!(
            item.desired_delivery_date,
            NaiveDate::from_ymd_opt(2026, 11, 20)
        );
    }

    #[test]
    fn test_patch_payload_keeps_version_and_drops_absent_fields() {
        let payload = PatchItemPayload::quantity_only(5, 3);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "quantity": 5, "version": 3 })
        );
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let payload = CreateItemPayload {
            nomenclature_code: "NOM-7".into(),
            nomenclature_name: "Картридж".into(),
            quantity: 2,
            unit_code: "PCS".into(),
            price_without_vat: 0.0,
            desired_delivery_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            comment: normalize_comment("   "),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nomenclatureCode": "NOM-7",
                "nomenclatureName": "Картридж",
                "quantity": 2,
                "unitCode": "PCS",
                "priceWithoutVat": 0.0,
                "desiredDeliveryDate": "2026-12-01"
            })
        );
    }
}
