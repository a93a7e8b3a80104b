//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::VARIANTS_TAB_PREFIX;
use crate::domain::a001_product::ui::list::ProductCatalogList;
use crate::domain::a001_product::ui::variants::ProductVariantsPage;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_configure_order::review::OrderReviewPage;
use crate::usecases::u501_configure_order::ConfigureOrderView;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_product", "u501_configure_order")
/// * `tabs_store` - контекст для закрытия таба из самой страницы
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        // a001: каталог товаров
        "a001_product" => view! { <ProductCatalogList /> }.into_any(),

        k if k.starts_with(VARIANTS_TAB_PREFIX) => {
            let product_id = k.trim_start_matches(VARIANTS_TAB_PREFIX).to_string();
            log!("✅ Creating ProductVariantsPage for: {}", product_id);
            view! { <ProductVariantsPage product_id=product_id on_close=on_close /> }.into_any()
        }

        // a002: все строки заказа
        "a002_inventory_ledger" => view! { <OrderReviewPage on_close=on_close /> }.into_any(),

        // u501: настройка заказа
        "u501_configure_order" => view! { <ConfigureOrderView on_close=on_close /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
