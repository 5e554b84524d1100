use contracts::domain::a001_requisition::Requisition;
use contracts::enums::RequisitionStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct RequisitionListState {
    pub items: Vec<Requisition>,
    /// None = все статусы
    pub status_filter: Option<RequisitionStatus>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for RequisitionListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status_filter: None,
            search_query: String::new(),
            sort_field: "id".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

impl RequisitionListState {
    /// Строки для таблицы: фильтр по статусу, поиск, сортировка
    pub fn visible_items(&self) -> Vec<Requisition> {
        let by_status: Vec<Requisition> = self
            .items
            .iter()
            .filter(|r| self.status_filter.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        let mut rows = filter_list(by_status, &self.search_query);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    pub fn count_by_status(&self, status: RequisitionStatus) -> usize {
        self.items.iter().filter(|r| r.status == status).count()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

impl Searchable for Requisition {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.number.to_lowercase().contains(filter_lower)
            || self.organizer_id.to_lowercase().contains(filter_lower)
    }
}

impl Sortable for Requisition {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => self.number.cmp(&other.number),
            "status" => self.status.label().cmp(other.status.label()),
            "organizer" => self.organizer_id.cmp(&other.organizer_id),
            "total" => self
                .total_lot_sum_no_nds
                .partial_cmp(&other.total_lot_sum_no_nds)
                .unwrap_or(Ordering::Equal),
            _ => self.id.cmp(&other.id),
        }
    }
}

pub fn create_state() -> RwSignal<RequisitionListState> {
    RwSignal::new(RequisitionListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: i64, number: &str, status: RequisitionStatus, total: f64) -> Requisition {
        Requisition {
            id,
            number: number.to_string(),
            status,
            organizer_id: "user-123".to_string(),
            total_lot_sum_no_nds: total,
            created_from: None,
            updated_from: None,
        }
    }

    fn state() -> RequisitionListState {
        RequisitionListState {
            items: vec![
                req(1, "REQ-0001", RequisitionStatus::Draft, 100.0),
                req(2, "REQ-0002", RequisitionStatus::Approved, 50.0),
                req(3, "REQ-0003", RequisitionStatus::Draft, 75.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn newest_first_by_default() {
        let ids: Vec<i64> = state().visible_items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn status_filter_and_counts() {
        let mut s = state();
        assert_eq!(s.count_by_status(RequisitionStatus::Draft), 2);
        assert_eq!(s.count_by_status(RequisitionStatus::Closed), 0);

        s.status_filter = Some(RequisitionStatus::Approved);
        let rows = s.visible_items();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, "REQ-0002");
    }

    #[test]
    fn search_by_number_and_sort_by_total() {
        let mut s = state();
        s.search_query = "0003".to_string();
        assert_eq!(s.visible_items().len(), 1);

        s.search_query.clear();
        s.toggle_sort("total");
        let totals: Vec<f64> = s.visible_items().iter().map(|r| r.total_lot_sum_no_nds).collect();
        assert_eq!(totals, vec![50.0, 75.0, 100.0]);

        s.toggle_sort("total");
        assert!(!s.sort_ascending);
    }
}
