use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статус заявки на закупку. Переходы между статусами определяет бэкенд,
/// клиент лишь отражает их таблицей из `a001_requisition::status_policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequisitionStatus {
    Draft,
    Submitted,
    Approved,
    InProcurement,
    Closed,
    Rejected,
    Cancelled,
}

impl RequisitionStatus {
    /// Все статусы в порядке жизненного цикла
    pub const ALL: [RequisitionStatus; 7] = [
        RequisitionStatus::Draft,
        RequisitionStatus::Submitted,
        RequisitionStatus::Approved,
        RequisitionStatus::InProcurement,
        RequisitionStatus::Closed,
        RequisitionStatus::Rejected,
        RequisitionStatus::Cancelled,
    ];

    /// Код статуса в API
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisitionStatus::Draft => "DRAFT",
            RequisitionStatus::Submitted => "SUBMITTED",
            RequisitionStatus::Approved => "APPROVED",
            RequisitionStatus::InProcurement => "IN_PROCUREMENT",
            RequisitionStatus::Closed => "CLOSED",
            RequisitionStatus::Rejected => "REJECTED",
            RequisitionStatus::Cancelled => "CANCELLED",
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            RequisitionStatus::Draft => "Черновик",
            RequisitionStatus::Submitted => "Подана",
            RequisitionStatus::Approved => "Утверждена",
            RequisitionStatus::InProcurement => "В закупке",
            RequisitionStatus::Closed => "Закрыта",
            RequisitionStatus::Rejected => "Отклонена",
            RequisitionStatus::Cancelled => "Отменена",
        }
    }
}

impl fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequisitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequisitionStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown requisition status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        for status in RequisitionStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<RequisitionStatus>(), Ok(status));
        }
        assert_eq!(
            serde_json::from_str::<RequisitionStatus>("\"IN_PROCUREMENT\"").unwrap(),
            RequisitionStatus::InProcurement
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("ARCHIVED".parse::<RequisitionStatus>().is_err());
        assert!(serde_json::from_str::<RequisitionStatus>("\"draft\"").is_err());
    }
}
