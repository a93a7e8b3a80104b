pub mod aggregate;

pub use aggregate::{
    clamp_quantity, parse_quantity, InventoryEntry, InventoryKey, InventoryLedger, LedgerChange,
};
