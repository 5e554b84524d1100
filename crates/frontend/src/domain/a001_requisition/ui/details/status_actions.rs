use contracts::enums::RequisitionStatus;
use leptos::prelude::*;
use thaw::*;

/// Кнопка в панели действий карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Transition(RequisitionStatus),
    /// Отдельный эндпоинт /reactivate для отменённой заявки
    Reactivate,
}

impl StatusAction {
    pub fn label(&self, current: RequisitionStatus) -> &'static str {
        match self {
            StatusAction::Transition(target) => current.transition_label(*target),
            StatusAction::Reactivate => "Восстановить",
        }
    }

    pub fn is_danger(&self) -> bool {
        match self {
            StatusAction::Transition(target) => RequisitionStatus::is_danger(*target),
            StatusAction::Reactivate => false,
        }
    }

    /// Текст подтверждения в окне браузера
    pub fn confirm_message(&self, current: RequisitionStatus, number: &str) -> String {
        match self {
            StatusAction::Transition(target) => format!(
                "{} заявку {}?\nНовый статус: {}",
                self.label(current),
                number,
                target.label()
            ),
            StatusAction::Reactivate => {
                format!("Восстановить отменённую заявку {} в черновик?", number)
            }
        }
    }
}

/// Доступные действия для статуса: переходы по таблице, для отменённой
/// заявки дополнительно реактивация
pub fn actions_for(status: RequisitionStatus) -> Vec<StatusAction> {
    let mut actions: Vec<StatusAction> = status
        .policy()
        .allowed_targets
        .iter()
        .map(|target| StatusAction::Transition(*target))
        .collect();
    if status == RequisitionStatus::Cancelled {
        actions.push(StatusAction::Reactivate);
    }
    actions
}

#[component]
pub fn StatusActions(
    #[prop(into)] status: Signal<Option<RequisitionStatus>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_action: Callback<StatusAction>,
) -> impl IntoView {
    view! {
        {move || {
            let Some(current) = status.get() else {
                return ().into_any();
            };
            let actions = actions_for(current);
            if actions.is_empty() {
                return view! {
                    <span class="status-actions__final">"Финальный статус, переходов нет"</span>
                }
                .into_any();
            }
            view! {
                <Space>
                    {actions
                        .into_iter()
                        .map(|action| {
                            let class = if action.is_danger() {
                                "status-actions__button status-actions__button--danger"
                            } else {
                                "status-actions__button"
                            };
                            view! {
                                <Button
                                    class=class
                                    appearance=ButtonAppearance::Secondary
                                    disabled=busy
                                    on_click=move |_| on_action.run(action)
                                >
                                    {action.label(current)}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Space>
            }
            .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RequisitionStatus::*;

    #[test]
    fn draft_offers_submit_and_cancel() {
        assert_eq!(
            actions_for(Draft),
            vec![
                StatusAction::Transition(Submitted),
                StatusAction::Transition(Cancelled)
            ]
        );
    }

    #[test]
    fn closed_has_no_actions() {
        assert!(actions_for(Closed).is_empty());
    }

    #[test]
    fn cancelled_can_return_both_ways() {
        let actions = actions_for(Cancelled);
        assert_eq!(
            actions,
            vec![StatusAction::Transition(Draft), StatusAction::Reactivate]
        );
        assert_eq!(actions[0].label(Cancelled), "Реактивировать");
        assert_eq!(actions[1].label(Cancelled), "Восстановить");
    }

    #[test]
    fn rejected_returns_to_draft_without_reactivate() {
        assert_eq!(actions_for(Rejected), vec![StatusAction::Transition(Draft)]);
    }

    #[test]
    fn danger_and_confirmation() {
        let reject = StatusAction::Transition(Rejected);
        assert!(reject.is_danger());
        assert!(!StatusAction::Transition(Approved).is_danger());

        let text = reject.confirm_message(Submitted, "REQ-7");
        assert!(text.starts_with("Отклонить заявку REQ-7?"));
        assert!(text.contains(Rejected.label()));
    }
}
