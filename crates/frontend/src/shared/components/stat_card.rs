use crate::shared::icons::icon;
use leptos::prelude::*;

/// Визуальный акцент карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    tone: Signal<StatTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
