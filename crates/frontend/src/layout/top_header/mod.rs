//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::usecases::u501_configure_order::state::use_order_store;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_order_store();

    let is_sidebar_visible = move || ctx.left_open.get();
    let ordered_units = move || store.session.with(|s| s.ledger().total_required());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Order Circle"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Сколько единиц уже в заказе; клик открывает проверку
                <button
                    class="top-header__icon-btn"
                    title="Проверка заказа"
                    on:click=move |_| {
                        ctx.open_tab("a002_inventory_ledger", &tab_label_for_key("a002_inventory_ledger"))
                    }
                >
                    {icon("shopping-cart")}
                    <span class="top-header__counter">{ordered_units}</span>
                </button>
            </div>
        </div>
    }
}
