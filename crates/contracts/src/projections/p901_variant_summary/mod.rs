pub mod dto;
pub mod status;

pub use dto::{build_variants, filter_variants, ProductVariant, VariantSummary};
pub use status::{Fulfillment, StockStatus};
