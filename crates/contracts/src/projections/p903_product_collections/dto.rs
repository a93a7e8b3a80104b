use crate::domain::a001_product::{Catalog, ProductId};
use serde::{Deserialize, Serialize};

/// Коллекция в браузере каталога: товары с одинаковым названием
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCollection {
    pub name: String,
    pub product_ids: Vec<ProductId>,
    pub variant_count: usize,
    pub total_stock: u64,
}

/// Коллекции в порядке первого появления названия в каталоге
pub fn collections(catalog: &Catalog) -> Vec<ProductCollection> {
    let mut result: Vec<ProductCollection> = Vec::new();

    for product in catalog.products() {
        let idx = match result.iter().position(|c| c.name == product.name) {
            Some(idx) => idx,
            None => {
                result.push(ProductCollection {
                    name: product.name.clone(),
                    product_ids: Vec::new(),
                    variant_count: 0,
                    total_stock: 0,
                });
                result.len() - 1
            }
        };
        let collection = &mut result[idx];
        collection.product_ids.push(product.id.clone());
        collection.variant_count += product.variant_count();
        collection.total_stock += product.total_available();
    }

    result
}
