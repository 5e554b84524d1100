/// Отображаемые имена сущности для вкладок и заголовков
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLabels {
    /// Индекс агрегата (например, "a001")
    pub index: &'static str,
    /// Техническое имя коллекции (например, "requisition")
    pub collection: &'static str,
    /// Имя одного элемента ("Заявка")
    pub element_name: &'static str,
    /// Имя списка ("Заявки на закупку")
    pub list_name: &'static str,
}

impl EntityLabels {
    /// Ключ вкладки списка вида "a001_requisition"
    pub fn list_key(&self) -> String {
        format!("{}_{}", self.index, self.collection)
    }

    /// Ключ вкладки карточки вида "a001_requisition_detail_42"
    pub fn detail_key(&self, id: impl std::fmt::Display) -> String {
        format!("{}_{}_detail_{}", self.index, self.collection, id)
    }

    /// Обратная операция к `detail_key`
    pub fn parse_detail_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        let prefix = format!("{}_{}_detail_", self.index, self.collection);
        key.strip_prefix(prefix.as_str()).filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: EntityLabels = EntityLabels {
        index: "a001",
        collection: "requisition",
        element_name: "Заявка",
        list_name: "Заявки",
    };

    #[test]
    fn detail_key_round_trips_through_parse() {
        let key = LABELS.detail_key(42);
        assert_eq!(key, "a001_requisition_detail_42");
        assert_eq!(LABELS.parse_detail_key(&key), Some("42"));
    }

    #[test]
    fn parse_detail_key_rejects_foreign_keys() {
        assert_eq!(LABELS.parse_detail_key("a001_requisition"), None);
        assert_eq!(LABELS.parse_detail_key("a001_requisition_detail_"), None);
        assert_eq!(LABELS.parse_detail_key("a003_nomenclature_detail_1"), None);
    }
}
