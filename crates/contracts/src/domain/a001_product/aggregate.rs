use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

/// ID товара каталога.
///
/// Строится из названия (slug) при сборке каталога и гарантированно
/// уникален в пределах одного `Catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty product id".to_string());
        }
        Ok(ProductId::new(s))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Размер в каталоге: метка и доступное количество на момент загрузки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDetail {
    pub size: String,
    pub available_quantity: u32,
}

impl SizeDetail {
    pub fn new(size: impl Into<String>, available_quantity: u32) -> Self {
        Self {
            size: size.into(),
            available_quantity,
        }
    }
}

/// Цвет/модель товара с упорядоченным списком размеров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Название цвета (уникально в пределах товара, с учётом регистра)
    pub color: String,
    pub sizes: Vec<SizeDetail>,
}

impl ColorVariant {
    pub fn new(color: impl Into<String>, sizes: Vec<SizeDetail>) -> Self {
        Self {
            color: color.into(),
            sizes,
        }
    }

    pub fn find_size(&self, size: &str) -> Option<&SizeDetail> {
        self.sizes.iter().find(|s| s.size == size)
    }

    pub fn total_available(&self) -> u64 {
        self.sizes.iter().map(|s| s.available_quantity as u64).sum()
    }
}

/// Товар каталога (агрегат a001)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub colors: Vec<ColorVariant>,
}

impl Product {
    /// Найти цвет по точному совпадению названия
    pub fn find_color(&self, color: &str) -> Option<&ColorVariant> {
        self.colors.iter().find(|c| c.color == color)
    }

    /// Количество вариантов (цвет × размер)
    pub fn variant_count(&self) -> usize {
        self.colors.iter().map(|c| c.sizes.len()).sum()
    }

    pub fn total_available(&self) -> u64 {
        self.colors.iter().map(ColorVariant::total_available).sum()
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Каталог товаров"
    }
}

/// Slug из названия: нижний регистр, любые серии символов вне `[a-z0-9]`
/// схлопываются в `-`, крайние `-` отбрасываются.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Jeans 511"), "jeans-511");
        assert_eq!(slugify("527 STD BOOT CUT"), "527-std-boot-cut");
        assert_eq!(slugify("LO-BALL CARGO"), "lo-ball-cargo");
        assert_eq!(slugify("  --Classic  Tee!! "), "classic-tee");
        assert_eq!(slugify("WE'RE FINALLY LANDING"), "we-re-finally-landing");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_product_totals() {
        let product = Product {
            id: ProductId::new("tee"),
            name: "Tee".to_string(),
            colors: vec![
                ColorVariant::new("white", vec![SizeDetail::new("sm", 3), SizeDetail::new("md", 4)]),
                ColorVariant::new("black", vec![SizeDetail::new("sm", 0)]),
            ],
        };

        assert_eq!(product.variant_count(), 3);
        assert_eq!(product.total_available(), 7);
        assert!(product.find_color("White").is_none());
        assert_eq!(
            product.find_color("white").and_then(|c| c.find_size("md")),
            Some(&SizeDetail::new("md", 4))
        );
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("jeans-511"), Ok(ProductId::new("jeans-511")));
        assert!(ProductId::from_string("  ").is_err());
        assert_eq!(Product::full_name(), "a001_product");
    }
}
