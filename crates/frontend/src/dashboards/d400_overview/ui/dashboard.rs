use contracts::domain::a001_requisition::{Requisition, ENTITY_LABELS as REQUISITION};
use contracts::domain::a002_requisition_item::rules::MIN_DELIVERY_LEAD_DAYS;
use contracts::domain::a003_nomenclature::ENTITY_LABELS as NOMENCLATURE;
use contracts::domain::a004_unit_of_measure::ENTITY_LABELS as UNITS;
use contracts::domain::common::ApiError;
use contracts::enums::RequisitionStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_requisition::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{requisition_tab_label, tab_label_for_key};
use crate::shared::components::{ApiErrorAlert, StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;

/// Заявка с наименьшим id в данном статусе
pub fn first_with_status(items: &[Requisition], status: RequisitionStatus) -> Option<&Requisition> {
    items
        .iter()
        .filter(|r| r.status == status)
        .min_by_key(|r| r.id)
}

fn status_tone(status: RequisitionStatus) -> StatTone {
    match status {
        RequisitionStatus::Approved | RequisitionStatus::Closed => StatTone::Success,
        RequisitionStatus::Submitted | RequisitionStatus::InProcurement => StatTone::Warning,
        RequisitionStatus::Rejected => StatTone::Error,
        RequisitionStatus::Draft | RequisitionStatus::Cancelled => StatTone::Neutral,
    }
}

/// Правила, которые проверяет бэкенд и которые можно увидеть в интерфейсе
fn rules() -> Vec<String> {
    vec![
        "Строки меняются только в черновике".to_string(),
        "Последнюю строку заявки удалить нельзя".to_string(),
        "Одна номенклатура встречается в заявке один раз".to_string(),
        "Единица измерения должна быть разрешена для номенклатуры".to_string(),
        format!(
            "Дата поставки не раньше чем через {} дня от сегодня",
            MIN_DELIVERY_LEAD_DAYS
        ),
        "Изменение строки отправляет её версию; устаревшая версия даёт конфликт".to_string(),
        "Переходы статусов проверяются сервером".to_string(),
    ]
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let (items, set_items) = signal(Vec::<Requisition>::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            match api::list_requisitions(&session.client()).await {
                Ok(list) => set_items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loaded.set(true);
        });
    };
    load();

    let open_list = move |key: &str| tabs_store.open_tab(key, tab_label_for_key(key));
    let open_first = move |status: RequisitionStatus| {
        let target = items.with_untracked(|list| {
            first_with_status(list, status).map(|r| (r.id, r.number.clone()))
        });
        match target {
            Some((id, number)) => tabs_store.open_tab(
                &REQUISITION.detail_key(id),
                &requisition_tab_label(Some(&number), id),
            ),
            None => open_list(&REQUISITION.list_key()),
        }
    };

    let counters = RequisitionStatus::ALL
        .iter()
        .map(|status| {
            let status = *status;
            let value = Signal::derive(move || {
                loaded
                    .get()
                    .then(|| items.with(|list| list.iter().filter(|r| r.status == status).count()))
                    .map(|n| n.to_string())
            });
            view! {
                <StatCard
                    label=status.label().to_string()
                    icon_name="requisitions"
                    value=value
                    tone=status_tone(status)
                    on_click=Callback::new(move |_| open_list(&REQUISITION.list_key()))
                />
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Главная"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ApiErrorAlert error=error />

                <h2>"Заявки по статусам"</h2>
                <div class="dashboard__grid">{counters}</div>

                <h2>"Быстрые действия"</h2>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_first(RequisitionStatus::Draft)
                    >
                        "Открыть первый черновик"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| open_first(RequisitionStatus::Approved)
                    >
                        "Открыть первую утверждённую"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| open_list(&REQUISITION.list_key())
                    >
                        {icon("requisitions")}
                        " Все заявки"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_list(&NOMENCLATURE.list_key())
                    >
                        {icon("nomenclature")}
                        " Номенклатура"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_list(&UNITS.list_key())
                    >
                        {icon("units")}
                        " Единицы измерения"
                    </Button>
                </Space>

                <h2>"Правила"</h2>
                <ul class="dashboard__rules">
                    {rules().into_iter().map(|rule| view! { <li>{rule}</li> }).collect_view()}
                </ul>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: i64, status: RequisitionStatus) -> Requisition {
        Requisition {
            id,
            number: format!("REQ-{}", id),
            status,
            organizer_id: "admin".into(),
            total_lot_sum_no_nds: 0.0,
            created_from: None,
            updated_from: None,
        }
    }

    #[test]
    fn first_draft_has_lowest_id() {
        let list = vec![
            req(9, RequisitionStatus::Draft),
            req(4, RequisitionStatus::Approved),
            req(5, RequisitionStatus::Draft),
        ];
        assert_eq!(first_with_status(&list, RequisitionStatus::Draft).map(|r| r.id), Some(5));
        assert_eq!(first_with_status(&list, RequisitionStatus::Approved).map(|r| r.id), Some(4));
        assert!(first_with_status(&list, RequisitionStatus::Closed).is_none());
    }
}
