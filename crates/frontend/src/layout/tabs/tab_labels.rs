//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для агрегатов и юзкейсов заголовок берётся из их метаданных в contracts.

use contracts::domain::a001_product::Product;
use contracts::domain::a002_inventory_ledger::InventoryLedger;
use contracts::domain::common::AggregateRoot;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_configure_order::ConfigureOrder;

/// Префикс ключа вкладки вариантов товара: `a001_product_variants_{product_id}`
pub const VARIANTS_TAB_PREFIX: &str = "a001_product_variants_";

pub fn variants_tab_key(product_id: &str) -> String {
    format!("{}{}", VARIANTS_TAB_PREFIX, product_id)
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(product_id) = key.strip_prefix(VARIANTS_TAB_PREFIX) {
        return format!("Варианты: {}", product_id);
    }

    match key {
        k if k == Product::full_name() => Product::list_name().to_string(),
        k if k == InventoryLedger::full_name() => InventoryLedger::list_name().to_string(),
        k if k == ConfigureOrder::full_name() => ConfigureOrder::display_name().to_string(),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(tab_label_for_key("a001_product"), "Каталог товаров");
        assert_eq!(tab_label_for_key("u501_configure_order"), "Новый заказ");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }

    #[test]
    fn test_variants_key() {
        let key = variants_tab_key("jeans-511");
        assert_eq!(key, "a001_product_variants_jeans-511");
        assert_eq!(tab_label_for_key(&key), "Варианты: jeans-511");
    }
}
