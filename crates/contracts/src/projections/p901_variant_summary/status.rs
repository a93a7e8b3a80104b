use serde::{Deserialize, Serialize};

/// Статус остатка для бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// 0 → нет в наличии; не больше порога → мало; иначе в наличии
    pub fn from_quantity(quantity: u32, low_stock_threshold: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "В наличии",
            StockStatus::LowStock => "Мало",
            StockStatus::OutOfStock => "Нет в наличии",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Возможность выполнить заказ из доступного остатка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fulfillment {
    Full,
    Partial { percent: u32 },
}

impl Fulfillment {
    /// Полностью, если требуется не больше, чем доступно.
    /// Иначе процент = доступно / требуется, округлённый до целого.
    pub fn evaluate(required: u64, available: u64) -> Self {
        if required <= available {
            return Fulfillment::Full;
        }
        let percent = (available as f64 / required as f64 * 100.0).round() as u32;
        Fulfillment::Partial { percent }
    }

    pub fn percent(&self) -> u32 {
        match self {
            Fulfillment::Full => 100,
            Fulfillment::Partial { percent } => *percent,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Fulfillment::Full)
    }

    pub fn label(&self) -> String {
        match self {
            Fulfillment::Full => "Полностью выполним".to_string(),
            Fulfillment::Partial { percent } => format!("Частично ({}%)", percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_quantity(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(10, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(11, 10), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(1, 0), StockStatus::InStock);
    }

    #[test]
    fn test_fulfillment() {
        assert_eq!(Fulfillment::evaluate(0, 0), Fulfillment::Full);
        assert_eq!(Fulfillment::evaluate(0, 0).percent(), 100);
        assert_eq!(Fulfillment::evaluate(80, 40), Fulfillment::Partial { percent: 50 });
        assert_eq!(Fulfillment::evaluate(10, 10), Fulfillment::Full);
        assert_eq!(Fulfillment::evaluate(3, 2), Fulfillment::Partial { percent: 67 });
        assert_eq!(Fulfillment::evaluate(8, 1), Fulfillment::Partial { percent: 13 });
        assert_eq!(Fulfillment::evaluate(5, 0), Fulfillment::Partial { percent: 0 });
    }

    #[test]
    fn test_labels() {
        assert_eq!(Fulfillment::Partial { percent: 50 }.label(), "Частично (50%)");
        assert_eq!(StockStatus::LowStock.to_string(), "low-stock");
    }
}
