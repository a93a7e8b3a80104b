pub mod autocomplete;
pub mod stat_card;
pub mod stock_badge;
pub mod table;

pub use autocomplete::Autocomplete;
pub use stat_card::{StatCard, StatTone};
pub use stock_badge::{FulfillmentBadge, StockBadge};
