use serde::{Deserialize, Serialize};

use crate::domain::common::EntityLabels;

pub const ENTITY_LABELS: EntityLabels = EntityLabels {
    index: "a003",
    collection: "nomenclature",
    element_name: "Номенклатура",
    list_name: "Номенклатура",
};

/// Позиция справочника номенклатуры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomenclature {
    pub code: String,
    pub name: String,
    /// Коды единиц измерения, допустимых для этой позиции
    #[serde(default)]
    pub allowed_units: Vec<String>,
}

impl Nomenclature {
    pub fn allows_unit(&self, unit_code: &str) -> bool {
        self.allowed_units.iter().any(|u| u == unit_code)
    }

    /// Подпись для выпадающего списка: "NOM-1 — Бумага"
    pub fn display_label(&self) -> String {
        format!("{} — {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_and_unit_check() {
        let nom: Nomenclature = serde_json::from_value(json!({
            "code": "NOM-1",
            "name": "Бумага А4",
            "allowedUnits": ["PCS", "PACK"]
        }))
        .unwrap();
        assert!(nom.allows_unit("PACK"));
        assert!(!nom.allows_unit("KG"));
        assert_eq!(nom.display_label(), "NOM-1 — Бумага А4");
    }
}
