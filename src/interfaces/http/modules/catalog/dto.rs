//! Catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::catalog::Product;
use crate::interfaces::http::modules::pagination::dto::default_page;
use crate::shared::types::PaginatedResult;

/// Raw category names to normalize
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NormalizeCategoriesRequest {
    #[validate(length(max = 1000))]
    pub categories: Vec<String>,
}

/// Trimmed, deduplicated, sorted category names
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Products fetched from the backend plus the page to show
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductPageRequest {
    #[validate(length(max = 10000))]
    pub products: Vec<Product>,
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    /// Page size. Default and cap come from configuration
    #[validate(range(min = 1))]
    pub limit: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub max_visible: Option<u32>,
    pub viewport_width: Option<u32>,
}

/// One page of the public catalog
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductPageResponse {
    pub page: PaginatedResult<Product>,
    /// Categories across every visible product, not just this page
    pub categories: Vec<String>,
}

/// Products to filter down to banner entries
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BannerRequest {
    #[validate(length(max = 10000))]
    pub products: Vec<Product>,
}
