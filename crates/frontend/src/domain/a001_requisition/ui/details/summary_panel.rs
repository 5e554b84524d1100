use contracts::domain::common::ApiError;
use contracts::projections::p900_requisition_summary::RequisitionSummary;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::number_format::{format_money_in, format_quantity};
use crate::shared::components::StatCard;

/// Итоги заявки из /summary. Значения не пересчитываются на клиенте.
#[component]
pub fn SummaryPanel(
    #[prop(into)] summary: Signal<Option<RequisitionSummary>>,
    #[prop(into)] error: Signal<Option<ApiError>>,
) -> impl IntoView {
    let field = move |f: fn(&RequisitionSummary) -> Option<String>| {
        Signal::derive(move || summary.with(|s| s.as_ref().and_then(f)))
    };

    view! {
        <div class="summary-panel">
            <Show when=move || error.with(|e| e.is_some())>
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        {move || {
                            error
                                .get()
                                .map(|e| format!("Итоги недоступны: {}", e.message))
                        }}
                    </MessageBarBody>
                </MessageBar>
            </Show>
            <div class="summary-panel__grid">
                <StatCard
                    label="Сумма без НДС".to_string()
                    icon_name="database"
                    value=field(|s| {
                        Some(format_money_in(s.total_amount_without_vat, s.currency_code()))
                    })
                />
                <StatCard
                    label="Количество".to_string()
                    icon_name="plus"
                    value=field(|s| Some(format_quantity(s.total_quantity)))
                />
                <StatCard
                    label="Строк".to_string()
                    icon_name="requisitions"
                    value=field(|s| Some(s.item_count.to_string()))
                />
                <StatCard
                    label="Поставка".to_string()
                    icon_name="zap"
                    value=field(|s| Some(s.delivery_range().unwrap_or_else(|| "—".to_string())))
                />
            </div>
        </div>
    }
}
