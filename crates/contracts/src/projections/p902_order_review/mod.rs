pub mod dto;

pub use dto::{group_lines, review_lines, OrderDraft, OrderTotals, ReviewGroup, ReviewLine, Shipping};
