pub mod a001_product;
pub mod a002_inventory_ledger;
pub mod common;
