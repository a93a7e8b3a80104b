use crate::domain::a001_product::{Catalog, ProductId};
use crate::domain::a002_inventory_ledger::{InventoryKey, InventoryLedger};
use crate::projections::p901_variant_summary::StockStatus;
use serde::{Deserialize, Serialize};

/// Строка сетки размеров для выбранной пары (товар, цвет)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRow {
    pub size: String,
    pub available_quantity: u32,
    pub required_quantity: u32,
    pub stock_status: StockStatus,
}

impl SizeRow {
    /// Размер без остатка не редактируется
    pub fn is_read_only(&self) -> bool {
        self.available_quantity == 0
    }
}

/// Итоги по активной сетке
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTotals {
    pub required: u64,
    pub available: u64,
}

impl SelectionTotals {
    pub fn from_rows(rows: &[SizeRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            required: acc.required + row.required_quantity as u64,
            available: acc.available + row.available_quantity as u64,
        })
    }

    /// Есть ли хотя бы одно ненулевое количество (включает кнопку «Далее»)
    pub fn has_required(&self) -> bool {
        self.required > 0
    }
}

/// Сопоставить размеры каталога с реестром.
///
/// Количество строки берётся из реестра по (товар, цвет, размер), иначе 0.
/// Неизвестный товар или цвет дают пустой список.
pub fn reconcile(
    catalog: &Catalog,
    ledger: &InventoryLedger,
    product_id: &ProductId,
    color: &str,
    low_stock_threshold: u32,
) -> Vec<SizeRow> {
    let Some(variant) = catalog
        .find(product_id)
        .and_then(|product| product.find_color(color))
    else {
        return Vec::new();
    };

    variant
        .sizes
        .iter()
        .map(|detail| {
            let key = InventoryKey::new(product_id.clone(), color, &detail.size);
            SizeRow {
                size: detail.size.clone(),
                available_quantity: detail.available_quantity,
                required_quantity: ledger.quantity_of(&key),
                stock_status: StockStatus::from_quantity(
                    detail.available_quantity,
                    low_stock_threshold,
                ),
            }
        })
        .collect()
}

/// Разбить строки на колонки по `sizes_per_column`, не больше `max_columns`.
///
/// Лишние строки уходят в последнюю колонку, чтобы ни один размер не пропал.
pub fn columns(rows: &[SizeRow], sizes_per_column: usize, max_columns: usize) -> Vec<Vec<SizeRow>> {
    let per_column = sizes_per_column.max(1);
    let max_columns = max_columns.max(1);

    let mut result: Vec<Vec<SizeRow>> = rows.chunks(per_column).map(<[SizeRow]>::to_vec).collect();
    if result.len() > max_columns {
        let overflow: Vec<SizeRow> = result.drain(max_columns..).flatten().collect();
        if let Some(last) = result.last_mut() {
            last.extend(overflow);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock_data::showcase_records;

    fn catalog() -> Catalog {
        Catalog::from_records(showcase_records()).unwrap()
    }

    fn quantities(rows: &[SizeRow]) -> Vec<(&str, u32)> {
        rows.iter()
            .map(|r| (r.size.as_str(), r.required_quantity))
            .collect()
    }

    #[test]
    fn test_reconcile_without_ledger() {
        let catalog = catalog();
        let rows = reconcile(&catalog, &InventoryLedger::new(), &ProductId::new("jeans-511"), "red", 10);

        let available: Vec<(&str, u32)> = rows
            .iter()
            .map(|r| (r.size.as_str(), r.available_quantity))
            .collect();
        assert_eq!(
            available,
            vec![("xs", 25), ("sm", 105), ("md", 80), ("lg", 65), ("xl", 45), ("xxl", 30)]
        );
        assert!(rows.iter().all(|r| r.required_quantity == 0));
    }

    #[test]
    fn test_reconcile_picks_ledger_quantities_for_pair_only() {
        let catalog = catalog();
        let jeans = ProductId::new("jeans-511");
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(InventoryKey::new(jeans.clone(), "red", "sm"), "Jeans 511", 30);
        ledger.set_quantity(InventoryKey::new(jeans.clone(), "blue", "lg"), "Jeans 511", 4);

        let red = reconcile(&catalog, &ledger, &jeans, "red", 10);
        assert_eq!(
            quantities(&red),
            vec![("xs", 0), ("sm", 30), ("md", 0), ("lg", 0), ("xl", 0), ("xxl", 0)]
        );

        let blue = reconcile(&catalog, &ledger, &jeans, "blue", 10);
        assert_eq!(blue.iter().map(|r| r.required_quantity).sum::<u32>(), 4);
    }

    #[test]
    fn test_reconcile_unknown_pair_is_empty() {
        let catalog = catalog();
        let ledger = InventoryLedger::new();
        assert!(reconcile(&catalog, &ledger, &ProductId::new("missing"), "red", 10).is_empty());
        assert!(reconcile(&catalog, &ledger, &ProductId::new("jeans-511"), "Red", 10).is_empty());
    }

    #[test]
    fn test_row_status_and_read_only() {
        let catalog = catalog();
        let rows = reconcile(&catalog, &InventoryLedger::new(), &ProductId::new("jeans-511"), "blue", 10);

        let sm = rows.iter().find(|r| r.size == "sm").unwrap();
        assert!(sm.is_read_only());
        assert_eq!(sm.stock_status, StockStatus::OutOfStock);

        let xl = rows.iter().find(|r| r.size == "xl").unwrap();
        assert!(!xl.is_read_only());
        assert_eq!(xl.stock_status, StockStatus::LowStock);
    }

    #[test]
    fn test_selection_totals() {
        let catalog = catalog();
        let jeans = ProductId::new("jeans-511");
        let mut ledger = InventoryLedger::new();

        let rows = reconcile(&catalog, &ledger, &jeans, "red", 10);
        let totals = SelectionTotals::from_rows(&rows);
        assert_eq!(totals.available, 350);
        assert!(!totals.has_required());

        ledger.set_quantity(InventoryKey::new(jeans.clone(), "red", "xs"), "Jeans 511", 5);
        ledger.set_quantity(InventoryKey::new(jeans.clone(), "red", "xl"), "Jeans 511", 7);
        let rows = reconcile(&catalog, &ledger, &jeans, "red", 10);
        let totals = SelectionTotals::from_rows(&rows);
        assert_eq!(totals.required, 12);
        assert!(totals.has_required());
    }

    #[test]
    fn test_columns_layout() {
        let rows: Vec<SizeRow> = (0..40)
            .map(|i| SizeRow {
                size: format!("s{}", i),
                available_quantity: 1,
                required_quantity: 0,
                stock_status: StockStatus::LowStock,
            })
            .collect();

        let layout = columns(&rows, 12, 3);
        let lengths: Vec<usize> = layout.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![12, 12, 16]);
        assert_eq!(layout[2].last().unwrap().size, "s39");

        let layout = columns(&rows[..5], 12, 3);
        assert_eq!(layout.len(), 1);
        assert!(columns(&[], 12, 3).is_empty());
    }
}
