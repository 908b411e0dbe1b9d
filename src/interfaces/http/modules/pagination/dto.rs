//! Pagination window DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::pagination::PageItem;

/// Query for `GET /api/v1/pagination/window`
///
/// `max_visible` takes precedence over `viewport_width`; with neither the
/// configured wide slot count is used.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowQuery {
    /// Current page (1-based). Default: 1. Clamped to `total_pages`.
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    /// Total number of pages
    #[validate(range(min = 1))]
    pub total_pages: u32,
    /// Page slots allowed before compaction (1–100)
    #[validate(range(min = 1, max = 100))]
    pub max_visible: Option<u32>,
    /// Client viewport width in CSS pixels
    pub viewport_width: Option<u32>,
}

pub(crate) fn default_page() -> u32 {
    1
}

/// Compact window for one page of a list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WindowResponse {
    /// Page the window was framed around (after clamping)
    pub current_page: u32,
    pub total_pages: u32,
    pub max_visible: u32,
    pub items: Vec<PageItem>,
    /// Plain-text rendering, e.g. `1 … 9 [10] 11 … 20`
    pub text: String,
}
