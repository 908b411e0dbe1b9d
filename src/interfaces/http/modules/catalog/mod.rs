//! Catalog module — category normalization and product listing pages

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
