pub mod dto;

pub use dto::{columns, reconcile, SelectionTotals, SizeRow};
