//! Таблица статусов заявки: допустимые переходы, редактируемость строк,
//! возможность удаления. Копия правил бэкенда для построения кнопок;
//! итоговое решение по любому переходу принимает сервер.

use crate::enums::RequisitionStatus;
use RequisitionStatus::*;

/// Что разрешено в заявке с данным статусом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    pub allowed_targets: &'static [RequisitionStatus],
    /// Строки можно добавлять, менять и удалять
    pub items_editable: bool,
    /// Заявку можно удалить целиком
    pub deletable: bool,
}

const DRAFT_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[Submitted, Cancelled],
    items_editable: true,
    deletable: true,
};

const SUBMITTED_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[Approved, Rejected, Cancelled],
    items_editable: false,
    deletable: false,
};

const APPROVED_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[InProcurement, Cancelled],
    items_editable: false,
    deletable: false,
};

const IN_PROCUREMENT_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[Closed, Cancelled],
    items_editable: false,
    deletable: false,
};

const CLOSED_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[],
    items_editable: false,
    deletable: false,
};

const RETURN_TO_DRAFT_POLICY: StatusPolicy = StatusPolicy {
    allowed_targets: &[Draft],
    items_editable: false,
    deletable: false,
};

impl RequisitionStatus {
    pub fn policy(&self) -> StatusPolicy {
        match self {
            Draft => DRAFT_POLICY,
            Submitted => SUBMITTED_POLICY,
            Approved => APPROVED_POLICY,
            InProcurement => IN_PROCUREMENT_POLICY,
            Closed => CLOSED_POLICY,
            Rejected | Cancelled => RETURN_TO_DRAFT_POLICY,
        }
    }

    pub fn can_transition_to(&self, target: RequisitionStatus) -> bool {
        self.policy().allowed_targets.contains(&target)
    }

    /// Подпись кнопки перехода из текущего статуса в `target`
    pub fn transition_label(&self, target: RequisitionStatus) -> &'static str {
        match (self, target) {
            (Cancelled, Draft) => "Реактивировать",
            (_, Draft) => "Вернуть в черновик",
            (_, Submitted) => "Подать на рассмотрение",
            (_, Approved) => "Утвердить",
            (_, InProcurement) => "Начать закупку",
            (_, Closed) => "Закрыть",
            (_, Rejected) => "Отклонить",
            (_, Cancelled) => "Отменить",
        }
    }

    /// Переход требует особого предупреждения
    pub fn is_danger(target: RequisitionStatus) -> bool {
        matches!(target, Rejected | Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        let expected: [(RequisitionStatus, &[RequisitionStatus]); 7] = [
            (Draft, &[Submitted, Cancelled]),
            (Submitted, &[Approved, Rejected, Cancelled]),
            (Approved, &[InProcurement, Cancelled]),
            (InProcurement, &[Closed, Cancelled]),
            (Closed, &[]),
            (Rejected, &[Draft]),
            (Cancelled, &[Draft]),
        ];
        for (status, targets) in expected {
            assert_eq!(status.policy().allowed_targets, targets, "{}", status);
        }
    }

    #[test]
    fn test_closed_offers_no_actions() {
        assert!(Closed.policy().allowed_targets.is_empty());
        for target in RequisitionStatus::ALL {
            assert!(!Closed.can_transition_to(target));
        }
    }

    #[test]
    fn test_only_draft_is_editable() {
        for status in RequisitionStatus::ALL {
            let policy = status.policy();
            assert_eq!(policy.items_editable, status == Draft);
            assert_eq!(policy.deletable, status == Draft);
        }
    }

    #[test]
    fn test_labels_depend_on_origin() {
        assert_eq!(Cancelled.transition_label(Draft), "Реактивировать");
        assert_eq!(Rejected.transition_label(Draft), "Вернуть в черновик");
        assert_eq!(Draft.transition_label(Submitted), "Подать на рассмотрение");
        assert!(RequisitionStatus::is_danger(Cancelled));
        assert!(!RequisitionStatus::is_danger(Approved));
    }
}
