//! Pagination window handler

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use super::dto::{WindowQuery, WindowResponse};
use crate::config::PaginationConfig;
use crate::domain::pagination::{clamp_page, max_visible_for_width, render_text};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult, ValidatedQuery};

/// Pagination handler state
#[derive(Clone)]
pub struct PaginationState {
    pub config: Arc<PaginationConfig>,
}

impl PaginationState {
    /// Explicit slot count, else one derived from the viewport, else the wide default.
    pub fn resolve_max_visible(&self, max_visible: Option<u32>, viewport_width: Option<u32>) -> u32 {
        max_visible
            .or_else(|| viewport_width.map(|w| max_visible_for_width(w, &self.config)))
            .unwrap_or(self.config.max_visible_wide)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/pagination/window",
    tag = "Pagination",
    params(WindowQuery),
    responses(
        (status = 200, description = "Compact page window", body = ApiResponse<WindowResponse>),
        (status = 400, description = "Malformed query"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn get_window(
    State(state): State<PaginationState>,
    ValidatedQuery(query): ValidatedQuery<WindowQuery>,
) -> ApiResult<WindowResponse> {
    let max_visible = state.resolve_max_visible(query.max_visible, query.viewport_width);
    let current_page = clamp_page(query.page, query.total_pages);

    let items = state
        .config
        .window_policy()
        .build(current_page, query.total_pages, max_visible)
        .map_err(domain_error)?;

    debug!(
        current_page,
        total_pages = query.total_pages,
        max_visible,
        slots = items.len(),
        "Built pagination window"
    );

    Ok(Json(ApiResponse::success(WindowResponse {
        current_page,
        total_pages: query.total_pages,
        max_visible,
        text: render_text(&items, current_page),
        items,
    })))
}
