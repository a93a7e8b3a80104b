pub mod p900_size_grid;
pub mod p901_variant_summary;
pub mod p902_order_review;
pub mod p903_product_collections;
