/// Утилиты для списков: поиск и сортировка на клиенте
use std::cmp::Ordering;

/// Минимальная длина поискового запроса
pub const MIN_FILTER_LEN: usize = 2;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (в нижнем регистре)
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу; короткий запрос не фильтрует
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.chars().count() < MIN_FILTER_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        qty: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter_lower: &str) -> bool {
            self.code.to_lowercase().contains(filter_lower)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.code.cmp(other.code),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "REQ-2", qty: 5 },
            Row { code: "REQ-10", qty: 1 },
            Row { code: "OTHER", qty: 3 },
        ]
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        assert_eq!(items.iter().map(|r| r.qty).collect::<Vec<_>>(), vec![1, 3, 5]);
        sort_list(&mut items, "qty", false);
        assert_eq!(items.iter().map(|r| r.qty).collect::<Vec<_>>(), vec![5, 3, 1]);
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "req").len(), 2);
        assert_eq!(filter_list(rows(), " Other ").len(), 1);
        // Короткий запрос не фильтрует
        assert_eq!(filter_list(rows(), "r").len(), 3);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("qty", "qty", true), " ▲");
        assert_eq!(get_sort_indicator("qty", "qty", false), " ▼");
        assert_eq!(get_sort_indicator("code", "qty", true), " ⇅");
    }
}
