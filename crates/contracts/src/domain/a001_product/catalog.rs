use super::aggregate::{slugify, ColorVariant, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Исходная запись каталога (до присвоения ID)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub colors: Vec<ColorVariant>,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, colors: Vec<ColorVariant>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

/// Ошибки сборки каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("product #{index} has an empty name")]
    EmptyProductName { index: usize },

    #[error("product '{product}' lists color '{color}' more than once")]
    DuplicateColor { product: String, color: String },

    #[error("product '{product}', color '{color}' lists size '{size}' more than once")]
    DuplicateSize {
        product: String,
        color: String,
        size: String,
    },
}

/// Пара label/value для автокомплита
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Каталог товаров: строится один раз при старте, дальше только чтение
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Собрать каталог из исходных записей.
    ///
    /// ID выводится из названия; при совпадении slug добавляется суффикс
    /// `-2`, `-3`, ... пока ID не станет уникальным.
    pub fn from_records(records: Vec<ProductRecord>) -> Result<Self, CatalogError> {
        let mut products = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyProductName { index: position });
            }
            validate_colors(&record)?;

            let id = unique_id(&slugify(&record.name), &index);
            index.insert(id.clone(), products.len());
            products.push(Product {
                id,
                name: record.name,
                colors: record.colors,
            });
        }

        Ok(Self { products, index })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Найти товар по строковому ID (значение из автокомплита)
    pub fn find_by_str(&self, id: &str) -> Option<&Product> {
        self.find(&ProductId::new(id))
    }

    pub fn product_options(&self) -> Vec<SelectOption> {
        self.products
            .iter()
            .map(|p| SelectOption {
                label: p.name.clone(),
                value: p.id.as_str().to_string(),
            })
            .collect()
    }

    /// Варианты цветов товара; для неизвестного товара пусто
    pub fn color_options(&self, id: &ProductId) -> Vec<SelectOption> {
        self.find(id)
            .map(|p| {
                p.colors
                    .iter()
                    .map(|c| SelectOption {
                        label: c.color.clone(),
                        value: c.color.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn validate_colors(record: &ProductRecord) -> Result<(), CatalogError> {
    let mut colors = HashSet::new();
    for color in &record.colors {
        if !colors.insert(color.color.as_str()) {
            return Err(CatalogError::DuplicateColor {
                product: record.name.clone(),
                color: color.color.clone(),
            });
        }

        let mut sizes = HashSet::new();
        for size in &color.sizes {
            if !sizes.insert(size.size.as_str()) {
                return Err(CatalogError::DuplicateSize {
                    product: record.name.clone(),
                    color: color.color.clone(),
                    size: size.size.clone(),
                });
            }
        }
    }
    Ok(())
}

fn unique_id(slug: &str, taken: &HashMap<ProductId, usize>) -> ProductId {
    let base = if slug.is_empty() { "product" } else { slug };

    let candidate = ProductId::new(base);
    if !taken.contains_key(&candidate) {
        return candidate;
    }

    (2..)
        .map(|n| ProductId::new(format!("{}-{}", base, n)))
        .find(|id| !taken.contains_key(id))
        .unwrap_or_else(|| ProductId::new(base))
}
