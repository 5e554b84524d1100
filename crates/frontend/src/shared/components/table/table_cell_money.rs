//! Ячейка таблицы для денежных значений
//!
//! ```ignore
//! <TableCellMoney value=item.price_without_vat />
//! <TableCellMoney value=item.amount() currency="KZT" show_currency=true bold=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Деньги с 2 знаками, разделителем тысяч и выравниванием вправо
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Код валюты, по умолчанию тенге
    #[prop(optional, default = "KZT")]
    currency: &'static str,

    #[prop(optional, default = false)]
    show_currency: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) if show_currency => format!("{} {}", format_money(v), currency),
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let cell_style = move || if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
