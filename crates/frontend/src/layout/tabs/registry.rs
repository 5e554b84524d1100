//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use super::tab_labels::HOME_TAB_KEY;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_requisition::ui::details::RequisitionDetails;
use crate::domain::a001_requisition::ui::list::RequisitionList;
use crate::domain::a003_nomenclature::ui::list::NomenclatureList;
use crate::domain::a004_unit_of_measure::ui::list::UnitOfMeasureList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_requisition::ENTITY_LABELS as A001;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_requisition", "a001_requisition_detail_42")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        HOME_TAB_KEY => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Domain Aggregates
        // ═══════════════════════════════════════════════════════════════════

        // a001: Requisitions
        "a001_requisition" => {
            log!("✅ Creating RequisitionList");
            view! { <RequisitionList /> }.into_any()
        }
        k if A001.parse_detail_key(k).is_some() => {
            match A001.parse_detail_key(k).and_then(|id| id.parse::<i64>().ok()) {
                Some(id) => view! {
                    <RequisitionDetails
                        id=id
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any(),
                None => {
                    log!("⚠️ Bad requisition tab key: {}", k);
                    view! { <div class="placeholder">{"Некорректный ключ вкладки"}</div> }
                        .into_any()
                }
            }
        }

        // a003 / a004: reference catalogs
        "a003_nomenclature" => view! { <NomenclatureList /> }.into_any(),
        "a004_unit_of_measure" => view! { <UnitOfMeasureList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Раздел не найден"}</div> }.into_any()
        }
    }
}
