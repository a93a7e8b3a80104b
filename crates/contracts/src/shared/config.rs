use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSettings {
    pub pricing: PricingConfig,
    pub stock: StockConfig,
    pub grid: GridConfig,
    pub latency: LatencyConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Фиксированная цена за единицу
    pub unit_cost: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    /// Остаток, не больше которого (и больше 0) размер считается «мало»
    pub low_stock_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub sizes_per_column: usize,
    pub max_columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub fetch_delay_ms: u32,
    pub save_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub seed: u64,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Настройки по умолчанию, встроенные в сборку
pub const DEFAULT_SETTINGS: &str = r#"
[pricing]
unit_cost = 12.5
currency = "USD"

[stock]
low_stock_threshold = 10

[grid]
sizes_per_column = 12
max_columns = 3

[latency]
fetch_delay_ms = 500
save_delay_ms = 1000

[catalog]
seed = 511
"#;

static DEFAULTS: Lazy<OrderSettings> =
    Lazy::new(|| parse_settings(DEFAULT_SETTINGS).expect("Invalid embedded settings"));

impl Default for OrderSettings {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

/// Разобрать и проверить настройки из TOML
pub fn parse_settings(contents: &str) -> Result<OrderSettings, SettingsError> {
    let settings: OrderSettings = toml::from_str(contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Загрузить настройки из необязательного TOML.
///
/// Без файла или при ошибке берутся встроенные значения; ошибка
/// возвращается рядом, чтобы вызывающий мог её показать.
pub fn load_settings(contents: Option<&str>) -> (OrderSettings, Option<SettingsError>) {
    match contents.map(parse_settings) {
        Some(Ok(settings)) => (settings, None),
        Some(Err(e)) => (OrderSettings::default(), Some(e)),
        None => (OrderSettings::default(), None),
    }
}

impl OrderSettings {
    fn validate(&self) -> Result<(), SettingsError> {
        if !self.pricing.unit_cost.is_finite() || self.pricing.unit_cost < 0.0 {
            return Err(SettingsError::Invalid {
                field: "pricing.unit_cost",
                reason: "must be a finite non-negative number",
            });
        }
        if self.grid.sizes_per_column == 0 {
            return Err(SettingsError::Invalid {
                field: "grid.sizes_per_column",
                reason: "must be greater than zero",
            });
        }
        if self.grid.max_columns == 0 {
            return Err(SettingsError::Invalid {
                field: "grid.max_columns",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = OrderSettings::default();
        assert_eq!(settings.pricing.unit_cost, 12.5);
        assert_eq!(settings.stock.low_stock_threshold, 10);
        assert_eq!(settings.grid.sizes_per_column, 12);
        assert_eq!(settings.grid.max_columns, 3);
        assert_eq!(settings.latency.fetch_delay_ms, 500);
        assert_eq!(settings.latency.save_delay_ms, 1000);
    }

    #[test]
    fn test_override_replaces_defaults() {
        let custom = DEFAULT_SETTINGS.replace("unit_cost = 12.5", "unit_cost = 20.0");
        let (settings, error) = load_settings(Some(&custom));
        assert!(error.is_none());
        assert_eq!(settings.pricing.unit_cost, 20.0);
    }

    #[test]
    fn test_broken_override_falls_back() {
        let (settings, error) = load_settings(Some("[pricing"));
        assert!(matches!(error, Some(SettingsError::Parse(_))));
        assert_eq!(settings, OrderSettings::default());

        let (_, error) = load_settings(None);
        assert!(error.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let negative = DEFAULT_SETTINGS.replace("unit_cost = 12.5", "unit_cost = -1.0");
        assert!(matches!(
            parse_settings(&negative),
            Err(SettingsError::Invalid { field: "pricing.unit_cost", .. })
        ));

        let zero_column = DEFAULT_SETTINGS.replace("sizes_per_column = 12", "sizes_per_column = 0");
        assert!(matches!(
            parse_settings(&zero_column),
            Err(SettingsError::Invalid { field: "grid.sizes_per_column", .. })
        ));
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive_upper_bound() {
        use crate::projections::p901_variant_summary::StockStatus;

        let threshold = OrderSettings::default().stock.low_stock_threshold;
        assert_eq!(StockStatus::from_quantity(1, threshold), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(threshold, threshold), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(threshold + 1, threshold), StockStatus::InStock);
    }
}
