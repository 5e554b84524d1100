//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_requisition--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_requisition/` directory.

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview page with counters and quick actions.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case / demo action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
];

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("a001_requisition--list"));
        assert!(is_valid_page_id("a001_requisition--detail"));
        assert!(!is_valid_page_id("a001_requisition"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_requisition--"));
    }

    #[test]
    fn known_categories() {
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("legacy"));
    }
}
