//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_product--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: catalog browser.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view for a single record: product variants.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case wizard / action page: order configuration.
pub const PAGE_CAT_USECASE: &str = "usecase";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_USECASE];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(is_valid_page_id("u501_configure_order--usecase"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--chart"));
    }
}
