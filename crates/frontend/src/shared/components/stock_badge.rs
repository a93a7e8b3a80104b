use contracts::projections::p901_variant_summary::{Fulfillment, StockStatus};
use leptos::prelude::*;
use thaw::*;

fn stock_color(status: StockStatus) -> BadgeColor {
    match status {
        StockStatus::InStock => BadgeColor::Success,
        StockStatus::LowStock => BadgeColor::Warning,
        StockStatus::OutOfStock => BadgeColor::Danger,
    }
}

/// Бейдж статуса остатка: в наличии / мало / нет
#[component]
pub fn StockBadge(status: StockStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=stock_color(status)>
            {status.label()}
        </Badge>
    }
}

/// Бейдж выполнимости заказа
#[component]
pub fn FulfillmentBadge(#[prop(into)] fulfillment: Signal<Fulfillment>) -> impl IntoView {
    view! {
        {move || {
            let f = fulfillment.get();
            let color = if f.is_full() { BadgeColor::Success } else { BadgeColor::Warning };
            view! {
                <Badge appearance=BadgeAppearance::Filled color=color>
                    {f.label()}
                </Badge>
            }
        }}
    }
}
