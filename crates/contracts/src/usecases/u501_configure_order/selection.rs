use crate::domain::a001_product::{Catalog, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Текущий выбор товара и цвета в конфигураторе
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    product_id: Option<ProductId>,
    color: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбрать товар по id.
    ///
    /// Цвет сбрасывается всегда, даже при повторном выборе того же товара.
    /// Неизвестный id сбрасывает выбор целиком. Возвращает, найден ли товар.
    pub fn select_product(&mut self, catalog: &Catalog, id: &str) -> bool {
        self.color = None;
        self.product_id = catalog.find_by_str(id).map(|p| p.id.clone());

        if self.product_id.is_none() && !id.is_empty() {
            log::debug!("select_product: unknown product id '{}'", id);
        }
        self.product_id.is_some()
    }

    /// Выбрать цвет у выбранного товара.
    ///
    /// Без выбранного товара ничего не делает. Пустая строка сбрасывает цвет.
    /// Цвет, которого нет у товара, запоминается, но сетка для него пуста.
    pub fn select_color(&mut self, color: &str) {
        if self.product_id.is_none() {
            return;
        }
        self.color = if color.is_empty() {
            None
        } else {
            Some(color.to_string())
        };
    }

    pub fn clear(&mut self) {
        self.product_id = None;
        self.color = None;
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.product_id.as_ref().and_then(|id| catalog.find(id))
    }

    /// Пара (товар, цвет), если оба выбраны
    pub fn active_pair(&self) -> Option<(&ProductId, &str)> {
        match (&self.product_id, &self.color) {
            (Some(id), Some(color)) => Some((id, color.as_str())),
            _ => None,
        }
    }

    /// Является ли пара текущим выбором
    pub fn is_active(&self, product_id: &ProductId, color: &str) -> bool {
        self.active_pair() == Some((product_id, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock_data::showcase_records;

    fn catalog() -> Catalog {
        Catalog::from_records(showcase_records()).unwrap()
    }

    #[test]
    fn test_select_product_resets_color() {
        let catalog = catalog();
        let mut selection = SelectionState::new();

        assert!(selection.select_product(&catalog, "jeans-511"));
        selection.select_color("red");
        assert_eq!(selection.color(), Some("red"));

        assert!(selection.select_product(&catalog, "jeans-511"));
        assert_eq!(selection.color(), None);
        assert_eq!(selection.product_id(), Some(&ProductId::new("jeans-511")));
    }

    #[test]
    fn test_unknown_product_clears_selection() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection.select_product(&catalog, "jeans-511");
        selection.select_color("red");

        assert!(!selection.select_product(&catalog, "no-such-product"));
        assert_eq!(selection, SelectionState::new());
    }

    #[test]
    fn test_select_color_requires_product() {
        let mut selection = SelectionState::new();
        selection.select_color("red");
        assert_eq!(selection.color(), None);
        assert!(selection.active_pair().is_none());
    }

    #[test]
    fn test_empty_color_clears() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection.select_product(&catalog, "classic-tee");
        selection.select_color("white");
        assert!(selection.is_active(&ProductId::new("classic-tee"), "white"));

        selection.select_color("");
        assert_eq!(selection.color(), None);
        assert!(selection.product(&catalog).is_some());
    }
}
