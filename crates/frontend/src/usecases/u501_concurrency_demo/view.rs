use contracts::domain::a002_requisition_item::RequisitionItem;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_concurrency_demo::{AttemptOutcome, ConcurrencyDemo, DemoReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Демонстрация оптимистичной блокировки на первой строке заявки.
/// После прогона вызывает `on_finished`, чтобы карточка перечитала данные.
#[component]
pub fn ConcurrencyDemoPanel(
    requisition_id: i64,
    #[prop(into)] item: Signal<Option<RequisitionItem>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_finished: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let (running, set_running) = signal(false);
    let (report, set_report) = signal(None::<DemoReport>);

    let run = move || {
        let Some(target) = item.get_untracked() else {
            return;
        };
        set_running.set(true);
        set_report.set(None);
        spawn_local(async move {
            let result = api::run_demo(&session.client(), requisition_id, &target).await;
            set_report.set(Some(result));
            set_running.set(false);
            on_finished.run(());
        });
    };

    let outcome_view = |outcome: &AttemptOutcome| {
        let (intent, class) = match outcome {
            AttemptOutcome::Succeeded { .. } => {
                (MessageBarIntent::Success, "demo-outcome demo-outcome--success")
            }
            AttemptOutcome::Conflict(_) => {
                (MessageBarIntent::Warning, "demo-outcome demo-outcome--conflict")
            }
            AttemptOutcome::Failed(_) => (MessageBarIntent::Error, "demo-outcome demo-outcome--error"),
        };
        let details = outcome
            .code_line()
            .map(|line| view! { <div class="demo-outcome__code">{line}</div> });
        (intent, class, details)
    };

    view! {
        <div class="usecase-panel">
            <div class="usecase-panel__header">
                <h3>{ConcurrencyDemo::display_name()}</h3>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| run()
                    disabled=Signal::derive(move || {
                        running.get() || disabled.get() || item.with(|i| i.is_none())
                    })
                >
                    {icon("zap")}
                    {move || if running.get() { " Выполняется..." } else { " Запустить" }}
                </Button>
            </div>
            <p class="usecase-panel__description">{ConcurrencyDemo::description()}</p>
            {move || {
                item.get()
                    .map(|i| {
                        view! {
                            <div class="usecase-panel__target">
                                {format!(
                                    "Строка {}: {} · кол-во {} · версия {}",
                                    i.row_number,
                                    i.nomenclature_code,
                                    i.quantity,
                                    i.version,
                                )}
                            </div>
                        }
                    })
            }}
            {move || {
                report
                    .get()
                    .map(|r| {
                        let verdict = if r.is_expected() {
                            "Ожидаемый результат: один запрос прошёл, второй получил конфликт версий"
                        } else {
                            "Неожиданный результат: проверьте ответы ниже"
                        };
                        view! {
                            <div class="usecase-panel__result">
                                {r
                                    .entries
                                    .into_iter()
                                    .map(|(attempt, outcome)| {
                                        let (intent, class, details) = outcome_view(&outcome);
                                        view! {
                                            <div class=class>
                                                <MessageBar intent=intent>
                                                    <MessageBarBody>
                                                        <MessageBarTitle>{attempt.label()}</MessageBarTitle>
                                                        {outcome.message()}
                                                        {details}
                                                    </MessageBarBody>
                                                </MessageBar>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <div class="usecase-panel__verdict">{verdict}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
