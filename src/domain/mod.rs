pub mod catalog;
pub mod pagination;

// Re-export commonly used types
pub use catalog::Product;
pub use pagination::{build_compact_pagination, PageItem, WindowPolicy};

pub use crate::shared::types::DomainError;
