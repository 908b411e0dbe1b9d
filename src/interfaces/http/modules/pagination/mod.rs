//! Pagination module — compact page-button windows for list views

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
