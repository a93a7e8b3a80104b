pub mod aggregate;
pub mod catalog;
pub mod mock_data;

pub use aggregate::{slugify, ColorVariant, Product, ProductId, SizeDetail};
pub use catalog::{Catalog, CatalogError, ProductRecord, SelectOption};
