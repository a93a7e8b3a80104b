pub mod dto;

pub use dto::{collections, ProductCollection};
