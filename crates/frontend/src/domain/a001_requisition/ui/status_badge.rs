use contracts::enums::RequisitionStatus;
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа для статуса заявки
pub fn badge_color(status: RequisitionStatus) -> BadgeColor {
    match status {
        RequisitionStatus::Draft => BadgeColor::Brand,
        RequisitionStatus::Submitted => BadgeColor::Warning,
        RequisitionStatus::Approved => BadgeColor::Success,
        RequisitionStatus::InProcurement => BadgeColor::Important,
        RequisitionStatus::Closed => BadgeColor::Informative,
        RequisitionStatus::Rejected => BadgeColor::Danger,
        RequisitionStatus::Cancelled => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(status: RequisitionStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(status)>
            {status.label()}
        </Badge>
    }
}
