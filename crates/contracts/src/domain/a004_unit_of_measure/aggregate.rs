use serde::{Deserialize, Serialize};

use crate::domain::common::EntityLabels;

pub const ENTITY_LABELS: EntityLabels = EntityLabels {
    index: "a004",
    collection: "unit_of_measure",
    element_name: "Единица измерения",
    list_name: "Единицы измерения",
};

/// Единица измерения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub code: String,
    pub name: String,
}

/// Название единицы по коду; неизвестный код показывается как есть
pub fn unit_name<'a>(units: &'a [UnitOfMeasure], code: &'a str) -> &'a str {
    units
        .iter()
        .find(|u| u.code == code)
        .map(|u| u.name.as_str())
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_name_falls_back_to_code() {
        let units = vec![UnitOfMeasure {
            code: "PCS".into(),
            name: "шт".into(),
        }];
        assert_eq!(unit_name(&units, "PCS"), "шт");
        assert_eq!(unit_name(&units, "KG"), "KG");
    }
}
