use crate::shared::icons::icon;
use leptos::prelude::*;

/// Цветовой акцент карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Click on the card (e.g. open the filtered list)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    let clickable = on_click.is_some();
    let card_class = if clickable {
        format!("{} stat-card--clickable", tone.class())
    } else {
        tone.class().to_string()
    };

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
