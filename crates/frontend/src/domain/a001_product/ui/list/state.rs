use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // filters
    pub q: String,
    pub only_in_stock: bool,
}

impl ProductListState {
    /// Товар проходит фильтры списка
    pub fn matches(&self, product: &Product) -> bool {
        if self.only_in_stock && product.total_available() == 0 {
            return false;
        }
        let q = self.q.trim().to_lowercase();
        q.is_empty()
            || product.name.to_lowercase().contains(&q)
            || product.id.as_str().contains(&q)
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{ColorVariant, ProductId, SizeDetail};

    fn product(name: &str, qty: u32) -> Product {
        Product {
            id: ProductId::new(name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            colors: vec![ColorVariant::new("red", vec![SizeDetail::new("m", qty)])],
        }
    }

    #[test]
    fn test_matches_by_name_and_id() {
        let jeans = product("Jeans 511", 5);
        let state = ProductListState {
            q: "JEANS".into(),
            ..Default::default()
        };
        assert!(state.matches(&jeans));

        let state = ProductListState {
            q: "jeans-511".into(),
            ..Default::default()
        };
        assert!(state.matches(&jeans));

        let state = ProductListState {
            q: "jacket".into(),
            ..Default::default()
        };
        assert!(!state.matches(&jeans));
    }

    #[test]
    fn test_only_in_stock() {
        let state = ProductListState {
            only_in_stock: true,
            ..Default::default()
        };
        assert!(state.matches(&product("Jeans 511", 1)));
        assert!(!state.matches(&product("Empty", 0)));
    }
}
