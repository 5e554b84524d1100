use contracts::domain::a002_requisition_item::rules::{AdvisoryViolation, ItemFormInput};
use contracts::domain::a002_requisition_item::RequisitionItem;
use contracts::domain::a003_nomenclature::Nomenclature;
use contracts::domain::a004_unit_of_measure::UnitOfMeasure;
use contracts::domain::common::{ApiError, ApiResult};
use leptos::prelude::*;

use crate::shared::date_utils::to_input_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormMode {
    Create,
    /// Меняются только количество, дата и комментарий
    Edit { item_id: i64, version: i64 },
}

/// Ответ сервера на сохранение строки
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved { notice: String },
    Rejected(ApiError),
}

impl SaveOutcome {
    pub fn from_result(mode: ItemFormMode, result: ApiResult<RequisitionItem>) -> Self {
        match (mode, result) {
            (ItemFormMode::Create, Ok(item)) => SaveOutcome::Saved {
                notice: format!("Строка {} добавлена", item.row_number),
            },
            (ItemFormMode::Edit { .. }, Ok(item)) => SaveOutcome::Saved {
                notice: format!(
                    "Строка {} сохранена, версия {}",
                    item.row_number, item.version
                ),
            },
            (_, Err(err)) => SaveOutcome::Rejected(err),
        }
    }
}

/// Поля формы строки из существующей строки
pub fn input_from_item(item: &RequisitionItem) -> ItemFormInput {
    ItemFormInput {
        nomenclature_code: item.nomenclature_code.clone(),
        nomenclature_name: item.nomenclature_name.clone(),
        unit_code: item.unit_code.clone(),
        price: item.price_without_vat.to_string(),
        quantity: item.quantity.to_string(),
        desired_delivery_date: item
            .desired_delivery_date
            .map(to_input_value)
            .unwrap_or_default(),
        comment: item.comment.clone().unwrap_or_default(),
    }
}

/// Единицы, разрешённые для номенклатуры. Код без записи в справочнике
/// показывается как есть.
pub fn units_for(nomenclature: Option<&Nomenclature>, units: &[UnitOfMeasure]) -> Vec<UnitOfMeasure> {
    let Some(nom) = nomenclature else {
        return Vec::new();
    };
    nom.allowed_units
        .iter()
        .map(|code| {
            units
                .iter()
                .find(|u| &u.code == code)
                .cloned()
                .unwrap_or_else(|| UnitOfMeasure {
                    code: code.clone(),
                    name: code.clone(),
                })
        })
        .collect()
}

/// Единица после смены номенклатуры: текущая, если разрешена, иначе
/// единственная разрешённая, иначе пусто
pub fn unit_after_nomenclature_change(nom: Option<&Nomenclature>, current_unit: &str) -> String {
    match nom {
        Some(n) if n.allows_unit(current_unit) => current_unit.to_string(),
        Some(n) if n.allowed_units.len() == 1 => n.allowed_units[0].clone(),
        _ => String::new(),
    }
}

#[derive(Clone, Copy)]
pub struct ItemFormVm {
    pub open: RwSignal<bool>,
    pub mode: RwSignal<ItemFormMode>,

    pub nomenclature_code: RwSignal<String>,
    pub nomenclature_name: RwSignal<String>,
    pub unit_code: RwSignal<String>,
    pub price: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub desired_delivery_date: RwSignal<String>,
    pub comment: RwSignal<String>,

    pub advisory: RwSignal<Option<AdvisoryViolation>>,
    pub server_error: RwSignal<Option<ApiError>>,
    pub saving: RwSignal<bool>,
}

impl ItemFormVm {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            mode: RwSignal::new(ItemFormMode::Create),
            nomenclature_code: RwSignal::new(String::new()),
            nomenclature_name: RwSignal::new(String::new()),
            unit_code: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            desired_delivery_date: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
            advisory: RwSignal::new(None),
            server_error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode.get(), ItemFormMode::Edit { .. })
    }

    pub fn open_create(&self) {
        self.mode.set(ItemFormMode::Create);
        self.fill(&ItemFormInput {
            quantity: "1".to_string(),
            ..Default::default()
        });
        self.open.set(true);
    }

    pub fn open_edit(&self, item: &RequisitionItem) {
        self.mode.set(ItemFormMode::Edit {
            item_id: item.id,
            version: item.version,
        });
        self.fill(&input_from_item(item));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    fn fill(&self, input: &ItemFormInput) {
        self.nomenclature_code.set(input.nomenclature_code.clone());
        self.nomenclature_name.set(input.nomenclature_name.clone());
        self.unit_code.set(input.unit_code.clone());
        self.price.set(input.price.clone());
        self.quantity.set(input.quantity.clone());
        self.desired_delivery_date
            .set(input.desired_delivery_date.clone());
        self.comment.set(input.comment.clone());
        self.advisory.set(None);
        self.server_error.set(None);
    }

    pub fn input(&self) -> ItemFormInput {
        ItemFormInput {
            nomenclature_code: self.nomenclature_code.get_untracked(),
            nomenclature_name: self.nomenclature_name.get_untracked(),
            unit_code: self.unit_code.get_untracked(),
            price: self.price.get_untracked(),
            quantity: self.quantity.get_untracked(),
            desired_delivery_date: self.desired_delivery_date.get_untracked(),
            comment: self.comment.get_untracked(),
        }
    }

    /// Выбор номенклатуры в режиме создания: подставить название и
    /// поправить единицу
    pub fn apply_nomenclature(&self, nomenclatures: &[Nomenclature]) {
        if self.mode.get_untracked() != ItemFormMode::Create {
            return;
        }
        let code = self.nomenclature_code.get_untracked();
        let nom = nomenclatures.iter().find(|n| n.code == code);
        self.nomenclature_name
            .set(nom.map(|n| n.name.clone()).unwrap_or_default());
        let unit = unit_after_nomenclature_change(nom, &self.unit_code.get_untracked());
        self.unit_code.set(unit);
    }

    /// Завершить сохранение. Успех закрывает форму, ошибка оставляет её
    /// открытой с введёнными значениями и ответом сервера.
    /// Возвращает `true`, если строка сохранена.
    pub fn finish_save(&self, outcome: SaveOutcome) -> bool {
        self.saving.set(false);
        match outcome {
            SaveOutcome::Saved { .. } => {
                self.close();
                true
            }
            SaveOutcome::Rejected(err) => {
                self.server_error.set(Some(err));
                false
            }
        }
    }

    /// Поле с ошибкой: клиентская подсказка или поле из ответа бэкенда
    pub fn invalid_field(&self) -> Option<String> {
        self.advisory
            .with(|a| a.as_ref().map(|a| a.field.to_string()))
            .or_else(|| self.server_error.with(|e| e.as_ref().and_then(|e| e.field.clone())))
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid_field().as_deref() == Some(field)
    }
}

impl Default for ItemFormVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nom(code: &str, units: &[&str]) -> Nomenclature {
        Nomenclature {
            code: code.to_string(),
            name: format!("Позиция {}", code),
            allowed_units: units.iter().map(|u| u.to_string()).collect(),
        }
    }

    fn catalog_units() -> Vec<UnitOfMeasure> {
        vec![
            UnitOfMeasure {
                code: "PCS".into(),
                name: "шт".into(),
            },
            UnitOfMeasure {
                code: "PACK".into(),
                name: "упак".into(),
            },
        ]
    }

    #[test]
    fn units_limited_to_allowed() {
        let n = nom("NOM-1", &["PACK", "BOX"]);
        let units = units_for(Some(&n), &catalog_units());
        let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["упак", "BOX"]);
        assert!(units_for(None, &catalog_units()).is_empty());
    }

    #[test]
    fn unit_is_kept_or_reset_on_nomenclature_change() {
        let multi = nom("NOM-1", &["PCS", "PACK"]);
        let single = nom("NOM-2", &["M"]);
        assert_eq!(unit_after_nomenclature_change(Some(&multi), "PACK"), "PACK");
        assert_eq!(unit_after_nomenclature_change(Some(&multi), "M"), "");
        assert_eq!(unit_after_nomenclature_change(Some(&single), "PCS"), "M");
        assert_eq!(unit_after_nomenclature_change(None, "PCS"), "");
    }

    fn item(version: i64) -> RequisitionItem {
        RequisitionItem {
            id: 4,
            row_number: 1,
            nomenclature_code: "NOM-1".into(),
            nomenclature_name: "Бумага".into(),
            quantity: 12,
            unit_code: "PACK".into(),
            price_without_vat: 450.5,
            desired_delivery_date: NaiveDate::from_ymd_opt(2026, 11, 20),
            comment: None,
            version,
        }
    }

    #[test]
    fn edit_input_comes_from_item() {
        let input = input_from_item(&item(3));
        assert_eq!(input.quantity, "12");
        assert_eq!(input.price, "450.5");
        assert_eq!(input.desired_delivery_date, "2026-11-20");
        assert_eq!(input.comment, "");
    }

    #[test]
    fn stale_version_conflict_keeps_form_open() {
        let vm = ItemFormVm::new();
        vm.open_edit(&item(3));
        vm.quantity.set("15".to_string());
        vm.saving.set(true);

        let conflict = ApiError::new(
            "OPTIMISTIC_LOCK_CONFLICT",
            "Item 4 was modified: expected version 3, current 4",
        )
        .with_status(409);
        let mode = vm.mode.get_untracked();
        assert_eq!(mode, ItemFormMode::Edit { item_id: 4, version: 3 });

        let outcome = SaveOutcome::from_result(mode, Err(conflict.clone()));
        assert_eq!(outcome, SaveOutcome::Rejected(conflict.clone()));
        assert!(!vm.finish_save(outcome));

        assert!(vm.open.get_untracked());
        assert!(!vm.saving.get_untracked());
        assert_eq!(vm.server_error.get_untracked(), Some(conflict));
        assert_eq!(vm.quantity.get_untracked(), "15");
        assert_eq!(vm.mode.get_untracked(), ItemFormMode::Edit { item_id: 4, version: 3 });
    }

    #[test]
    fn successful_edit_closes_form() {
        let vm = ItemFormVm::new();
        vm.open_edit(&item(3));
        let saved = RequisitionItem {
            quantity: 15,
            ..item(4)
        };
        let outcome = SaveOutcome::from_result(vm.mode.get_untracked(), Ok(saved));
        assert_eq!(
            outcome,
            SaveOutcome::Saved {
                notice: "Строка 1 сохранена, версия 4".to_string()
            }
        );
        assert!(vm.finish_save(outcome));
        assert!(!vm.open.get_untracked());
        assert!(vm.server_error.get_untracked().is_none());
    }
}
