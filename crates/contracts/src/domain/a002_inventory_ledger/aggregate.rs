use crate::domain::a001_product::ProductId;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Ключ строки реестра: (товар, цвет, размер)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryKey {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
}

impl InventoryKey {
    pub fn new(product_id: ProductId, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            product_id,
            color: color.into(),
            size: size.into(),
        }
    }

    /// Относится ли ключ к паре (товар, цвет)
    pub fn matches(&self, product_id: &ProductId, color: &str) -> bool {
        &self.product_id == product_id && self.color == color
    }
}

/// Строка реестра требуемых количеств.
///
/// В реестре хранятся только строки с `required_quantity > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(flatten)]
    pub key: InventoryKey,
    /// Название товара (денормализовано для отображения)
    pub product_name: String,
    pub required_quantity: u32,
}

/// Что произошло с реестром после `set_quantity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerChange {
    Inserted,
    Updated,
    Removed,
    Unchanged,
}

/// Реестр требуемых количеств (агрегат a002).
///
/// Единственный источник правды для всех введённых пользователем количеств
/// по всем товарам и цветам. Порядок строк совпадает с порядком добавления.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger {
    entries: Vec<InventoryEntry>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Установить требуемое количество по ключу.
    ///
    /// Отрицательные значения приводятся к 0; строка с нулевым количеством
    /// удаляется, новая строка создаётся только для положительного значения.
    pub fn set_quantity(
        &mut self,
        key: InventoryKey,
        product_name: &str,
        quantity: i64,
    ) -> LedgerChange {
        let quantity = clamp_quantity(quantity);
        let position = self.entries.iter().position(|e| e.key == key);

        let change = match position {
            Some(i) if quantity == 0 => {
                self.entries.remove(i);
                LedgerChange::Removed
            }
            Some(i) => {
                let entry = &mut self.entries[i];
                if entry.required_quantity == quantity {
                    LedgerChange::Unchanged
                } else {
                    entry.required_quantity = quantity;
                    LedgerChange::Updated
                }
            }
            None if quantity > 0 => {
                self.entries.push(InventoryEntry {
                    key: key.clone(),
                    product_name: product_name.to_string(),
                    required_quantity: quantity,
                });
                LedgerChange::Inserted
            }
            None => LedgerChange::Unchanged,
        };

        if change != LedgerChange::Unchanged {
            log::debug!(
                "ledger {:?}: {}/{}/{} = {} ({} entries)",
                change,
                key.product_id,
                key.color,
                key.size,
                quantity,
                self.entries.len()
            );
        }

        change
    }

    /// Все строки по паре (товар, цвет)
    pub fn entries_for(&self, product_id: &ProductId, color: &str) -> Vec<&InventoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.key.matches(product_id, color))
            .collect()
    }

    /// Все строки реестра (все положительные по инварианту) в порядке добавления
    pub fn all_positive_entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// Требуемое количество по ключу; 0 если строки нет
    pub fn quantity_of(&self, key: &InventoryKey) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| e.required_quantity)
            .unwrap_or(0)
    }

    pub fn total_required(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.required_quantity as u64)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl AggregateRoot for InventoryLedger {
    type Id = ();

    fn id(&self) -> &Self::Id {
        &()
    }

    fn description(&self) -> &str {
        "Требуемые количества"
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inventory_ledger"
    }

    fn element_name() -> &'static str {
        "Строка заказа"
    }

    fn list_name() -> &'static str {
        "Проверка заказа"
    }
}

/// Привести введённое количество к допустимому диапазону
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(0, u32::MAX as i64) as u32
}

/// Разобрать текст из поля ввода количества.
///
/// Берётся целочисленный префикс (`"12abc"` → 12); пустая строка и текст без
/// цифр дают 0, отрицательные значения приводятся к 0.
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() || negative {
        return 0;
    }

    prefix
        .parse::<i64>()
        .map(clamp_quantity)
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(color: &str, size: &str) -> InventoryKey {
        InventoryKey::new(ProductId::new("jeans-511"), color, size)
    }

    #[test]
    fn test_negative_quantity_never_stored() {
        let mut ledger = InventoryLedger::new();

        for q in [-1, -30, i64::MIN] {
            assert_eq!(ledger.set_quantity(key("red", "sm"), "Jeans 511", q), LedgerChange::Unchanged);
            assert_eq!(ledger.quantity_of(&key("red", "sm")), 0);
            assert!(ledger.is_empty());
        }

        ledger.set_quantity(key("red", "sm"), "Jeans 511", 10);
        assert_eq!(ledger.set_quantity(key("red", "sm"), "Jeans 511", -5), LedgerChange::Removed);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_zero_removes_entry() {
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(key("red", "sm"), "Jeans 511", 30);
        ledger.set_quantity(key("red", "md"), "Jeans 511", 5);

        assert_eq!(ledger.set_quantity(key("red", "sm"), "Jeans 511", 0), LedgerChange::Removed);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.all_positive_entries().iter().all(|e| e.key != key("red", "sm")));
        assert!(ledger.all_positive_entries().iter().all(|e| e.required_quantity > 0));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = InventoryLedger::new();
        once.set_quantity(key("red", "sm"), "Jeans 511", 12);

        let mut twice = InventoryLedger::new();
        twice.set_quantity(key("red", "sm"), "Jeans 511", 12);
        assert_eq!(twice.set_quantity(key("red", "sm"), "Jeans 511", 12), LedgerChange::Unchanged);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_keeps_insertion_order() {
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(key("red", "sm"), "Jeans 511", 1);
        ledger.set_quantity(key("blue", "lg"), "Jeans 511", 2);
        ledger.set_quantity(key("red", "xs"), "Jeans 511", 3);

        assert_eq!(ledger.set_quantity(key("red", "sm"), "Jeans 511", 9), LedgerChange::Updated);
        let sizes: Vec<&str> = ledger
            .all_positive_entries()
            .iter()
            .map(|e| e.key.size.as_str())
            .collect();
        assert_eq!(sizes, vec!["sm", "lg", "xs"]);

        ledger.set_quantity(key("red", "sm"), "Jeans 511", 0);
        ledger.set_quantity(key("red", "sm"), "Jeans 511", 4);
        let sizes: Vec<&str> = ledger
            .all_positive_entries()
            .iter()
            .map(|e| e.key.size.as_str())
            .collect();
        assert_eq!(sizes, vec!["lg", "xs", "sm"]);
    }

    #[test]
    fn test_entries_for_pair() {
        let mut ledger = InventoryLedger::new();
        ledger.set_quantity(key("red", "sm"), "Jeans 511", 1);
        ledger.set_quantity(key("blue", "sm"), "Jeans 511", 2);
        ledger.set_quantity(key("red", "lg"), "Jeans 511", 3);
        ledger.set_quantity(
            InventoryKey::new(ProductId::new("classic-tee"), "red", "sm"),
            "Classic Tee",
            4,
        );

        let red: Vec<u32> = ledger
            .entries_for(&ProductId::new("jeans-511"), "red")
            .iter()
            .map(|e| e.required_quantity)
            .collect();
        assert_eq!(red, vec![1, 3]);
        assert!(ledger.entries_for(&ProductId::new("jeans-511"), "RED").is_empty());
        assert_eq!(ledger.total_required(), 10);

        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("12abc"), 12);
        assert_eq!(parse_quantity("+7"), 7);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("99999999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(-1), 0);
        assert_eq!(clamp_quantity(5), 5);
        assert_eq!(clamp_quantity(i64::MAX), u32::MAX);
    }
}
