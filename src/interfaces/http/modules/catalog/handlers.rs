//! Catalog handlers

use axum::{extract::State, Json};
use tracing::debug;

use super::dto::{
    BannerRequest, CategoriesResponse, NormalizeCategoriesRequest, ProductPageRequest,
    ProductPageResponse,
};
use crate::domain::catalog::{self, Product};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::modules::pagination::PaginationState;
use crate::shared::types::PaginatedResult;

#[utoipa::path(
    post,
    path = "/api/v1/catalog/categories/normalize",
    tag = "Catalog",
    request_body = NormalizeCategoriesRequest,
    responses(
        (status = 200, description = "Normalized categories", body = ApiResponse<CategoriesResponse>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn normalize_categories(
    ValidatedJson(request): ValidatedJson<NormalizeCategoriesRequest>,
) -> ApiResult<CategoriesResponse> {
    let categories = catalog::normalize_categories(request.categories.iter().map(String::as_str));
    debug!(
        received = request.categories.len(),
        kept = categories.len(),
        "Normalized categories"
    );
    Ok(Json(ApiResponse::success(CategoriesResponse { categories })))
}

#[utoipa::path(
    post,
    path = "/api/v1/catalog/products/page",
    tag = "Catalog",
    request_body = ProductPageRequest,
    responses(
        (status = 200, description = "Page of enabled products", body = ApiResponse<ProductPageResponse>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn page_products(
    State(state): State<PaginationState>,
    ValidatedJson(request): ValidatedJson<ProductPageRequest>,
) -> ApiResult<ProductPageResponse> {
    let limit = request
        .limit
        .unwrap_or(state.config.default_limit)
        .min(state.config.max_limit);
    let max_visible = state.resolve_max_visible(request.max_visible, request.viewport_width);

    let visible = catalog::visible_products(&request.products);
    let categories = catalog::catalog_categories(&visible);
    let policy = state.config.window_policy();
    let page = PaginatedResult::from_slice(&visible, request.page, limit, max_visible, &policy)
        .map_err(domain_error)?;

    debug!(
        received = request.products.len(),
        visible = visible.len(),
        page = page.page,
        total_pages = page.total_pages,
        "Paged catalog products"
    );

    Ok(Json(ApiResponse::success(ProductPageResponse {
        page,
        categories,
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/catalog/products/banner",
    tag = "Catalog",
    request_body = BannerRequest,
    responses(
        (status = 200, description = "Enabled banner products", body = ApiResponse<Vec<Product>>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn banner_products(
    ValidatedJson(request): ValidatedJson<BannerRequest>,
) -> ApiResult<Vec<Product>> {
    Ok(Json(ApiResponse::success(catalog::banner_products(
        &request.products,
    ))))
}
