//! # Storefront Pager
//!
//! Pagination and catalog helpers for the storefront back office, served
//! over a small REST API.
//!
//! ## Architecture
//!
//! - **domain**: compact pagination windows, page math, catalog products and categories
//! - **shared**: error types, the paginated result envelope, shutdown coordination
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration
//! - **server**: server lifecycle used by the CLI
//!
//! ```
//! use storefront_pager::{build_compact_pagination, PageItem};
//!
//! let window = build_compact_pagination(10, 20, 7).unwrap();
//! assert_eq!(window[1], PageItem::Gap);
//! ```

pub mod config;
pub mod domain;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::catalog::Product;
pub use domain::pagination::{build_compact_pagination, render_text, PageItem, WindowPolicy};

pub use shared::types::{AppError, ConfigError, DomainError, PaginatedResult};

// Re-export API router
pub use interfaces::http::create_api_router;
