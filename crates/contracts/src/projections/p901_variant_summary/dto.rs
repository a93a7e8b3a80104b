use super::status::{Fulfillment, StockStatus};
use crate::domain::a001_product::{Product, ProductId};
use crate::domain::a002_inventory_ledger::{InventoryKey, InventoryLedger};
use serde::{Deserialize, Serialize};

/// Строка таблицы вариантов: один (цвет, размер) товара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    pub color: String,
    pub size: String,
    /// Остаток по каталогу
    pub total_quantity: u32,
    /// Уже заказано (из реестра)
    pub required_quantity: u32,
    pub available_to_sell: u32,
    pub stock_status: StockStatus,
}

/// Сводка по набору вариантов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub total_variants: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_quantity: u64,
    pub total_required: u64,
    pub total_available: u64,
    pub fulfillment: Fulfillment,
}

/// Варианты товара в порядке цвет × размер; N в id/sku начинается с 1
pub fn build_variants(
    product: &Product,
    ledger: &InventoryLedger,
    low_stock_threshold: u32,
) -> Vec<ProductVariant> {
    product
        .colors
        .iter()
        .flat_map(|color| color.sizes.iter().map(move |size| (color, size)))
        .enumerate()
        .map(|(i, (color, size))| {
            let n = i + 1;
            let sku = format!("{}-{}", product.id, n);
            let key = InventoryKey::new(product.id.clone(), &color.color, &size.size);
            let required_quantity = ledger.quantity_of(&key);
            let available_to_sell = size.available_quantity.saturating_sub(required_quantity);

            ProductVariant {
                id: format!("var-{}", n),
                product_id: product.id.clone(),
                name: format!(
                    "{} - Size: {} - Color: {} ({})",
                    product.name, size.size, color.color, sku
                ),
                sku,
                color: color.color.clone(),
                size: size.size.clone(),
                total_quantity: size.available_quantity,
                required_quantity,
                available_to_sell,
                stock_status: StockStatus::from_quantity(available_to_sell, low_stock_threshold),
            }
        })
        .collect()
}

impl VariantSummary {
    pub fn from_variants(variants: &[ProductVariant]) -> Self {
        let count = |status: StockStatus| {
            variants
                .iter()
                .filter(|v| v.stock_status == status)
                .count()
        };
        let total_quantity: u64 = variants.iter().map(|v| v.total_quantity as u64).sum();
        let total_required: u64 = variants.iter().map(|v| v.required_quantity as u64).sum();
        let total_available: u64 = variants.iter().map(|v| v.available_to_sell as u64).sum();

        Self {
            total_variants: variants.len(),
            in_stock: count(StockStatus::InStock),
            low_stock: count(StockStatus::LowStock),
            out_of_stock: count(StockStatus::OutOfStock),
            total_quantity,
            total_required,
            total_available,
            fulfillment: Fulfillment::evaluate(total_required, total_available),
        }
    }
}

/// Поиск без учёта регистра по названию или артикулу; пустой запрос — все строки
pub fn filter_variants<'a>(variants: &'a [ProductVariant], query: &str) -> Vec<&'a ProductVariant> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return variants.iter().collect();
    }
    variants
        .iter()
        .filter(|v| v.name.to_lowercase().contains(&query) || v.sku.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{Catalog, ColorVariant, ProductRecord, SizeDetail};

    fn catalog() -> Catalog {
        Catalog::from_records(vec![ProductRecord::new(
            "Jeans 511",
            vec![
                ColorVariant::new(
                    "red",
                    vec![SizeDetail::new("xs", 25), SizeDetail::new("sm", 105)],
                ),
                ColorVariant::new(
                    "blue",
                    vec![SizeDetail::new("sm", 0), SizeDetail::new("xl", 8)],
                ),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn test_build_variants() {
        let catalog = catalog();
        let product = catalog.find_by_str("jeans-511").unwrap();
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(
            InventoryKey::new(product.id.clone(), "red", "xs"),
            &product.name,
            20,
        );

        let variants = build_variants(product, &ledger, 10);
        assert_eq!(variants.len(), 4);

        let first = &variants[0];
        assert_eq!(first.id, "var-1");
        assert_eq!(first.sku, "jeans-511-1");
        assert_eq!(first.name, "Jeans 511 - Size: xs - Color: red (jeans-511-1)");
        assert_eq!(first.required_quantity, 20);
        assert_eq!(first.available_to_sell, 5);
        assert_eq!(first.stock_status, StockStatus::LowStock);

        assert_eq!(variants[1].stock_status, StockStatus::InStock);
        assert_eq!(variants[2].stock_status, StockStatus::OutOfStock);
        assert_eq!(variants[3].sku, "jeans-511-4");
    }

    #[test]
    fn test_summary_counts() {
        let catalog = catalog();
        let product = catalog.find_by_str("jeans-511").unwrap();
        let variants = build_variants(product, &InventoryLedger::new(), 10);

        let summary = VariantSummary::from_variants(&variants);
        assert_eq!(summary.total_variants, 4);
        assert_eq!(summary.in_stock, 2);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.total_quantity, 138);
        assert_eq!(summary.total_required, 0);
        assert_eq!(summary.fulfillment, Fulfillment::Full);

        let empty = VariantSummary::from_variants(&[]);
        assert_eq!(empty.total_variants, 0);
        assert_eq!(empty.fulfillment, Fulfillment::Full);
    }

    fn tee_with_ordered(stock: u32, ordered: i64) -> VariantSummary {
        let catalog = Catalog::from_records(vec![ProductRecord::new(
            "Tee",
            vec![ColorVariant::new("white", vec![SizeDetail::new("sm", stock)])],
        )])
        .unwrap();
        let product = catalog.find_by_str("tee").unwrap();
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(InventoryKey::new(product.id.clone(), "white", "sm"), "Tee", ordered);

        VariantSummary::from_variants(&build_variants(product, &ledger, 10))
    }

    #[test]
    fn test_summary_fulfillment_uses_available_to_sell() {
        // остаток 100, заказано 60: к продаже 40 из 60 требуемых
        let summary = tee_with_ordered(100, 60);
        assert_eq!(summary.total_quantity, 100);
        assert_eq!(summary.total_available, 40);
        assert_eq!(summary.fulfillment, Fulfillment::Partial { percent: 67 });

        // заказ больше остатка: к продаже ничего
        let summary = tee_with_ordered(40, 80);
        assert_eq!(summary.total_available, 0);
        assert_eq!(summary.fulfillment, Fulfillment::Partial { percent: 0 });

        let summary = tee_with_ordered(100, 50);
        assert_eq!(summary.total_available, 50);
        assert_eq!(summary.fulfillment, Fulfillment::Full);
    }

    #[test]
    fn test_filter_variants() {
        let catalog = catalog();
        let product = catalog.find_by_str("jeans-511").unwrap();
        let variants = build_variants(product, &InventoryLedger::new(), 10);

        assert_eq!(filter_variants(&variants, "").len(), 4);
        assert_eq!(filter_variants(&variants, "  BLUE ").len(), 2);
        assert_eq!(filter_variants(&variants, "jeans-511-3").len(), 1);
        assert!(filter_variants(&variants, "green").is_empty());
    }
}
