pub mod list;
pub mod variants;
