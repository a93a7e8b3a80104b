pub mod common;
pub mod u501_configure_order;
