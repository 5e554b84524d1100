use contracts::domain::a002_requisition_item::rules::can_delete_item;
use contracts::domain::a002_requisition_item::RequisitionItem;
use contracts::domain::a004_unit_of_measure::{unit_name, UnitOfMeasure};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{format_quantity, TableCellMoney};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;

/// Строки заявки по порядку номеров
pub fn ordered_items(items: &[RequisitionItem]) -> Vec<RequisitionItem> {
    let mut rows = items.to_vec();
    rows.sort_by_key(|item| item.row_number);
    rows
}

#[component]
pub fn ItemTable(
    #[prop(into)] items: Signal<Vec<RequisitionItem>>,
    #[prop(into)] units: Signal<Vec<UnitOfMeasure>>,
    /// Заявка в черновике
    #[prop(into)]
    editable: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_edit: Callback<RequisitionItem>,
    #[prop(into)] on_delete: Callback<RequisitionItem>,
) -> impl IntoView {
    let edit_disabled = Signal::derive(move || !editable.get() || busy.get());
    let delete_disabled = Signal::derive(move || {
        busy.get() || !can_delete_item(editable.get(), items.with(|i| i.len()))
    });

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=40.0>"№"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Код"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=200.0>"Наименование"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=80.0>"Кол-во"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=70.0>"Ед."</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Цена без НДС"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Сумма"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Поставка"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=60.0>"Версия"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.with(|i| ordered_items(i))
                        key=|item| (item.id, item.version)
                        children=move |item| {
                            let price = item.price_without_vat;
                            let amount = item.amount();
                            let unit_code = item.unit_code.clone();
                            let unit = move || units.with(|u| unit_name(u, &unit_code).to_string());
                            let edit_item = item.clone();
                            let delete_item = item.clone();
                            view! {
                                <TableRow>
                                    <TableCell>{item.row_number}</TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.nomenclature_code.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {item.nomenclature_name.clone()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell class="text-right">{format_quantity(item.quantity)}</TableCell>
                                    <TableCell>{unit}</TableCell>
                                    <TableCellMoney value=Signal::derive(move || Some(price)) />
                                    <TableCellMoney value=Signal::derive(move || Some(amount)) bold=true />
                                    <TableCell>{format_optional_date(item.desired_delivery_date)}</TableCell>
                                    <TableCell>{item.version}</TableCell>
                                    <TableCell>
                                        <Space>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=edit_disabled
                                                on_click=move |_| on_edit.run(edit_item.clone())
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=delete_disabled
                                                on_click=move |_| on_delete.run(delete_item.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </Space>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || items.with(|i| i.is_empty())>
                <div class="table__empty">"Строк нет"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, row_number: i32) -> RequisitionItem {
        RequisitionItem {
            id,
            row_number,
            nomenclature_code: format!("NOM-{}", id),
            nomenclature_name: "Позиция".into(),
            quantity: 1,
            unit_code: "PCS".into(),
            price_without_vat: 10.0,
            desired_delivery_date: None,
            comment: None,
            version: 1,
        }
    }

    #[test]
    fn rows_follow_row_number() {
        let rows = ordered_items(&[item(7, 3), item(5, 1), item(6, 2)]);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }
}
