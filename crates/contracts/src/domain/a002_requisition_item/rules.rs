//! Подсказки для формы строки заявки.
//!
//! Проверки здесь рекомендательные: они ловят очевидные ошибки ввода до
//! отправки, но решение всегда остаётся за бэкендом, и его ответ об ошибке
//! показывается как есть. Имена полей совпадают с именами в JSON, чтобы
//! подсветка работала одинаково для клиентских и серверных ошибок.

use chrono::{Duration, NaiveDate};

use super::aggregate::{normalize_comment, CreateItemPayload, PatchItemPayload};
use crate::domain::a003_nomenclature::Nomenclature;

/// Минимальный срок поставки в днях от сегодняшней даты
pub const MIN_DELIVERY_LEAD_DAYS: i64 = 3;
pub const MIN_QUANTITY: i64 = 1;

pub const FIELD_NOMENCLATURE: &str = "nomenclatureCode";
pub const FIELD_UNIT: &str = "unitCode";
pub const FIELD_PRICE: &str = "priceWithoutVat";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_DELIVERY_DATE: &str = "desiredDeliveryDate";

/// Нарушение рекомендательного правила, привязанное к полю формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryViolation {
    pub field: &'static str,
    pub message: String,
}

impl AdvisoryViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Сырые значения полей формы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormInput {
    pub nomenclature_code: String,
    pub nomenclature_name: String,
    pub unit_code: String,
    pub price: String,
    pub quantity: String,
    pub desired_delivery_date: String,
    pub comment: String,
}

pub fn min_delivery_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(MIN_DELIVERY_LEAD_DAYS)
}

/// Удаление строки: только в редактируемой заявке и не последней строки
pub fn can_delete_item(items_editable: bool, item_count: usize) -> bool {
    items_editable && item_count > 1
}

/// Номенклатура для выбора: без уже использованных кодов, кроме
/// кода редактируемой строки
pub fn available_nomenclatures<'a>(
    all: &'a [Nomenclature],
    used_codes: &[&str],
    editing_code: Option<&str>,
) -> Vec<&'a Nomenclature> {
    all.iter()
        .filter(|n| !used_codes.contains(&n.code.as_str()) || editing_code == Some(n.code.as_str()))
        .collect()
}

pub fn parse_quantity(raw: &str) -> Result<i64, AdvisoryViolation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AdvisoryViolation::new(FIELD_QUANTITY, "Укажите количество"));
    }
    let quantity: i64 = raw.replace(' ', "").parse().map_err(|_| {
        AdvisoryViolation::new(FIELD_QUANTITY, "Количество должно быть целым числом")
    })?;
    if quantity < MIN_QUANTITY {
        return Err(AdvisoryViolation::new(
            FIELD_QUANTITY,
            format!("Количество должно быть ≥ {}", MIN_QUANTITY),
        ));
    }
    Ok(quantity)
}

pub fn parse_price(raw: &str) -> Result<f64, AdvisoryViolation> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Err(AdvisoryViolation::new(FIELD_PRICE, "Укажите цену"));
    }
    let price: f64 = cleaned
        .parse()
        .map_err(|_| AdvisoryViolation::new(FIELD_PRICE, "Цена должна быть числом"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(AdvisoryViolation::new(FIELD_PRICE, "Цена должна быть ≥ 0"));
    }
    Ok(price)
}

pub fn parse_delivery_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, AdvisoryViolation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AdvisoryViolation::new(
            FIELD_DELIVERY_DATE,
            "Выберите дату поставки",
        ));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AdvisoryViolation::new(FIELD_DELIVERY_DATE, "Дата должна быть в формате ГГГГ-ММ-ДД")
    })?;
    let min = min_delivery_date(today);
    if date < min {
        return Err(AdvisoryViolation::new(
            FIELD_DELIVERY_DATE,
            format!("Дата поставки не ранее {}", min.format("%Y-%m-%d")),
        ));
    }
    Ok(date)
}

/// Payload новой строки; единица проверяется по списку разрешённых
pub fn build_create_payload(
    input: &ItemFormInput,
    nomenclatures: &[Nomenclature],
    today: NaiveDate,
) -> Result<CreateItemPayload, AdvisoryViolation> {
    let nomenclature = nomenclatures
        .iter()
        .find(|n| n.code == input.nomenclature_code)
        .ok_or_else(|| AdvisoryViolation::new(FIELD_NOMENCLATURE, "Выберите номенклатуру"))?;

    if input.unit_code.is_empty() {
        return Err(AdvisoryViolation::new(FIELD_UNIT, "Выберите единицу измерения"));
    }
    if !nomenclature.allows_unit(&input.unit_code) {
        return Err(AdvisoryViolation::new(
            FIELD_UNIT,
            format!(
                "Единица {} не разрешена для {}",
                input.unit_code, nomenclature.code
            ),
        ));
    }

    let price_without_vat = parse_price(&input.price)?;
    let quantity = parse_quantity(&input.quantity)?;
    let desired_delivery_date = parse_delivery_date(&input.desired_delivery_date, today)?;

    let nomenclature_name = if input.nomenclature_name.trim().is_empty() {
        nomenclature.name.clone()
    } else {
        input.nomenclature_name.trim().to_string()
    };

    Ok(CreateItemPayload {
        nomenclature_code: nomenclature.code.clone(),
        nomenclature_name,
        quantity,
        unit_code: input.unit_code.clone(),
        price_without_vat,
        desired_delivery_date,
        comment: normalize_comment(&input.comment),
    })
}

/// Payload изменения строки с последней увиденной версией
pub fn build_patch_payload(
    input: &ItemFormInput,
    version: i64,
    today: NaiveDate,
) -> Result<PatchItemPayload, AdvisoryViolation> {
    let quantity = parse_quantity(&input.quantity)?;
    let desired_delivery_date = parse_delivery_date(&input.desired_delivery_date, today)?;

    Ok(PatchItemPayload {
        quantity: Some(quantity),
        desired_delivery_date: Some(desired_delivery_date),
        comment: normalize_comment(&input.comment),
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn catalog() -> Vec<Nomenclature> {
        vec![
            Nomenclature {
                code: "NOM-1".into(),
                name: "Бумага А4".into(),
                allowed_units: vec!["PCS".into(), "PACK".into()],
            },
            Nomenclature {
                code: "NOM-2".into(),
                name: "Кабель".into(),
                allowed_units: vec!["M".into()],
            },
            Nomenclature {
                code: "NOM-3".into(),
                name: "Тонер".into(),
                allowed_units: vec!["PCS".into()],
            },
        ]
    }

    fn valid_input() -> ItemFormInput {
        ItemFormInput {
            nomenclature_code: "NOM-1".into(),
            nomenclature_name: String::new(),
            unit_code: "PACK".into(),
            price: "1 200,50".into(),
            quantity: "4".into(),
            desired_delivery_date: "2026-10-21".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_delete_disabled_for_last_item() {
        assert!(!can_delete_item(true, 1));
        assert!(can_delete_item(true, 2));
        assert!(!can_delete_item(false, 5));
    }

    #[test]
    fn test_available_nomenclatures_excludes_used_codes() {
        let all = catalog();
        let codes = |list: Vec<&Nomenclature>| -> Vec<String> {
            list.into_iter().map(|n| n.code.clone()).collect()
        };

        assert_eq!(
            codes(available_nomenclatures(&all, &["NOM-1", "NOM-2"], None)),
            vec!["NOM-3"]
        );
        assert_eq!(
            codes(available_nomenclatures(&all, &["NOM-1", "NOM-2"], Some("NOM-2"))),
            vec!["NOM-2", "NOM-3"]
        );
    }

    #[test]
    fn test_delivery_date_lead_time() {
        assert_eq!(
            min_delivery_date(today()),
            NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
        );
        assert!(parse_delivery_date("2026-10-21", today()).is_ok());

        let err = parse_delivery_date("2026-10-20", today()).unwrap_err();
        assert_eq!(err.field, FIELD_DELIVERY_DATE);
        assert!(parse_delivery_date("21.10.2026", today()).is_err());
    }

    #[test]
    fn test_quantity_and_price_bounds() {
        assert_eq!(parse_quantity(" 1 "), Ok(1));
        assert_eq!(parse_quantity("0").unwrap_err().field, FIELD_QUANTITY);
        assert!(parse_quantity("1.5").is_err());

        assert_eq!(parse_price("0"), Ok(0.0));
        assert_eq!(parse_price("1 200,50"), Ok(1200.5));
        assert_eq!(parse_price("-1").unwrap_err().field, FIELD_PRICE);
    }

    #[test]
    fn test_create_payload_fills_name_from_catalog() {
        let payload = build_create_payload(&valid_input(), &catalog(), today()).unwrap();
        assert_eq!(payload.nomenclature_name, "Бумага А4");
        assert_eq!(payload.quantity, 4);
        assert_eq!(payload.price_without_vat, 1200.5);
        assert!(payload.comment.is_none());
    }

    #[test]
    fn test_create_payload_rejects_unit_outside_allowed_list() {
        let input = ItemFormInput {
            unit_code: "M".into(),
            ..valid_input()
        };
        let err = build_create_payload(&input, &catalog(), today()).unwrap_err();
        assert_eq!(err.field, FIELD_UNIT);
    }

    #[test]
    fn test_patch_payload_carries_version() {
        let input = ItemFormInput {
            quantity: "7".into(),
            comment: " уточнить цвет ".into(),
            ..valid_input()
        };
        let payload = build_patch_payload(&input, 3, today()).unwrap();
        assert_eq!(payload.version, 3);
        assert_eq!(payload.quantity, Some(7));
        assert_eq!(payload.comment.as_deref(), Some("уточнить цвет"));
    }
}
