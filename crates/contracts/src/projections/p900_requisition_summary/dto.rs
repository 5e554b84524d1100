use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Валюта, если бэкенд её не указал
pub const DEFAULT_CURRENCY: &str = "KZT";

/// Итоги заявки, рассчитанные бэкендом. Клиент их только показывает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionSummary {
    pub total_amount_without_vat: f64,
    pub total_quantity: i64,
    #[serde(default)]
    pub min_desired_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_desired_delivery_date: Option<NaiveDate>,
    pub item_count: i64,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RequisitionSummary {
    pub fn currency_code(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    /// Диапазон дат поставки вида "2026-11-01 — 2026-11-20"
    pub fn delivery_range(&self) -> Option<String> {
        match (self.min_desired_delivery_date, self.max_desired_delivery_date) {
            (Some(min), Some(max)) if min == max => Some(min.format("%Y-%m-%d").to_string()),
            (Some(min), Some(max)) => Some(format!(
                "{} — {}",
                min.format("%Y-%m-%d"),
                max.format("%Y-%m-%d")
            )),
            (Some(d), None) | (None, Some(d)) => Some(d.format("%Y-%m-%d").to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_summary() {
        let summary: RequisitionSummary = serde_json::from_value(json!({
            "totalAmountWithoutVat": 8601.5,
            "totalQuantity": 13,
            "minDesiredDeliveryDate": "2026-11-01",
            "maxDesiredDeliveryDate": "2026-11-20",
            "itemCount": 2,
            "currency": "KZT"
        }))
        .unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(
            summary.delivery_range().as_deref(),
            Some("2026-11-01 — 2026-11-20")
        );
    }

    #[test]
    fn test_missing_currency_and_dates() {
        let summary: RequisitionSummary = serde_json::from_value(json!({
            "totalAmountWithoutVat": 0.0,
            "totalQuantity": 0,
            "minDesiredDeliveryDate": null,
            "maxDesiredDeliveryDate": null,
            "itemCount": 0
        }))
        .unwrap();
        assert_eq!(summary.currency_code(), "KZT");
        assert!(summary.delivery_range().is_none());
    }
}
