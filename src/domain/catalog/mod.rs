//! Catalog aggregate
//!
//! Product visibility flags and category normalization.

pub mod model;

pub use model::{
    banner_products, catalog_categories, normalize_categories, visible_products, Product,
};
