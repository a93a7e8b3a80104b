use crate::domain::a001_product::{Catalog, ProductId};
use crate::domain::a002_inventory_ledger::{InventoryKey, InventoryLedger};
use serde::{Deserialize, Serialize};

/// Строка окна проверки заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLine {
    #[serde(flatten)]
    pub key: InventoryKey,
    pub product_name: String,
    pub required_quantity: u32,
    /// Остаток по каталогу; 0 если размер исчез из каталога
    pub available_quantity: u32,
    pub line_total: f64,
}

impl ReviewLine {
    pub fn exceeds_stock(&self) -> bool {
        self.required_quantity > self.available_quantity
    }
}

/// Строки проверки, сгруппированные по (товар, цвет)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewGroup {
    pub product_id: ProductId,
    pub product_name: String,
    pub color: String,
    pub lines: Vec<ReviewLine>,
}

impl ReviewGroup {
    pub fn quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.required_quantity as u64).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shipping {
    Tbd,
}

impl Shipping {
    pub fn label(&self) -> &'static str {
        match self {
            Shipping::Tbd => "TBD",
        }
    }
}

/// Итоги заказа по всему реестру
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub total_quantity: u64,
    pub unit_cost: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub shipping: Shipping,
    pub total: f64,
}

impl OrderTotals {
    /// Промежуточный итог = количество × цена за единицу; скидка и налог 0
    pub fn compute(ledger: &InventoryLedger, unit_cost: f64) -> Self {
        let total_quantity = ledger.total_required();
        let subtotal = total_quantity as f64 * unit_cost;
        Self {
            total_quantity,
            unit_cost,
            subtotal,
            discount: 0.0,
            tax: 0.0,
            shipping: Shipping::Tbd,
            total: subtotal,
        }
    }
}

/// Все строки реестра в порядке добавления, дополненные остатком из каталога
pub fn review_lines(catalog: &Catalog, ledger: &InventoryLedger, unit_cost: f64) -> Vec<ReviewLine> {
    ledger
        .all_positive_entries()
        .iter()
        .map(|entry| {
            let available_quantity = catalog
                .find(&entry.key.product_id)
                .and_then(|p| p.find_color(&entry.key.color))
                .and_then(|c| c.find_size(&entry.key.size))
                .map(|s| s.available_quantity)
                .unwrap_or(0);

            ReviewLine {
                key: entry.key.clone(),
                product_name: entry.product_name.clone(),
                required_quantity: entry.required_quantity,
                available_quantity,
                line_total: entry.required_quantity as f64 * unit_cost,
            }
        })
        .collect()
}

/// Группировка по (товар, цвет) в порядке первого появления пары
pub fn group_lines(lines: &[ReviewLine]) -> Vec<ReviewGroup> {
    let mut groups: Vec<ReviewGroup> = Vec::new();
    for line in lines {
        match groups
            .iter_mut()
            .find(|g| line.key.matches(&g.product_id, &g.color))
        {
            Some(group) => group.lines.push(line.clone()),
            None => groups.push(ReviewGroup {
                product_id: line.key.product_id.clone(),
                product_name: line.product_name.clone(),
                color: line.key.color.clone(),
                lines: vec![line.clone()],
            }),
        }
    }
    groups
}

/// Черновик заказа, отправляемый при сохранении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub currency: String,
    pub lines: Vec<ReviewLine>,
    pub totals: OrderTotals,
}

impl OrderDraft {
    pub fn build(catalog: &Catalog, ledger: &InventoryLedger, unit_cost: f64, currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            lines: review_lines(catalog, ledger, unit_cost),
            totals: OrderTotals::compute(ledger, unit_cost),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock_data::showcase_records;

    fn setup() -> (Catalog, InventoryLedger) {
        let catalog = Catalog::from_records(showcase_records()).unwrap();
        let jeans = ProductId::new("jeans-511");
        let tee = ProductId::new("classic-tee");

        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(InventoryKey::new(jeans.clone(), "red", "sm"), "Jeans 511", 30);
        ledger.set_quantity(InventoryKey::new(tee.clone(), "white", "lg"), "Classic Tee", 12);
        ledger.set_quantity(InventoryKey::new(jeans.clone(), "red", "xl"), "Jeans 511", 5);
        (catalog, ledger)
    }

    #[test]
    fn test_totals() {
        let (_, ledger) = setup();
        let totals = OrderTotals::compute(&ledger, 12.5);

        assert_eq!(totals.total_quantity, 47);
        assert_eq!(totals.subtotal, 587.5);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.shipping.label(), "TBD");
        assert_eq!(totals.total, totals.subtotal);

        let empty = OrderTotals::compute(&InventoryLedger::new(), 12.5);
        assert_eq!(empty.total_quantity, 0);
        assert_eq!(empty.total, 0.0);
    }

    #[test]
    fn test_review_lines_follow_ledger_order() {
        let (catalog, ledger) = setup();
        let lines = review_lines(&catalog, &ledger, 2.0);

        let keys: Vec<(&str, &str)> = lines
            .iter()
            .map(|l| (l.key.product_id.as_str(), l.key.size.as_str()))
            .collect();
        assert_eq!(keys, vec![("jeans-511", "sm"), ("classic-tee", "lg"), ("jeans-511", "xl")]);
        assert_eq!(lines[0].available_quantity, 105);
        assert_eq!(lines[0].line_total, 60.0);
        assert!(lines[1].exceeds_stock());
    }

    #[test]
    fn test_group_lines() {
        let (catalog, ledger) = setup();
        let groups = group_lines(&review_lines(&catalog, &ledger, 1.0));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product_name, "Jeans 511");
        assert_eq!(groups[0].lines.len(), 2);
        assert_eq!(groups[0].quantity(), 35);
        assert_eq!(groups[1].color, "white");
    }

    #[test]
    fn test_draft_serializes() {
        let (catalog, ledger) = setup();
        let draft = OrderDraft::build(&catalog, &ledger, 12.5, "USD");
        let json = draft.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["lines"][0]["product_id"], "jeans-511");
        assert_eq!(value["lines"][0]["required_quantity"], 30);
        assert_eq!(value["totals"]["shipping"], "tbd");

        let back: OrderDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
