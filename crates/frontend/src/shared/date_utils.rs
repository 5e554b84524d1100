//! Даты для таблиц и полей ввода
use chrono::NaiveDate;

/// Необязательная дата для таблиц: пустое значение показывается прочерком
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Значение для `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Текущая дата по часам браузера
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_date() {
        assert_eq!(format_optional_date(NaiveDate::from_ymd_opt(2026, 11, 1)), "01.11.2026");
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(
            to_input_value(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default()),
            "2026-01-05"
        );
    }
}
