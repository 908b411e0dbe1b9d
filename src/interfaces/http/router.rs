//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::domain::pagination::PageItem;

use super::modules::request_id::request_id_middleware;
use super::modules::{catalog, health, pagination};

/// Unified router state; each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub pagination: pagination::PaginationState,
    pub started_at: Arc<Instant>,
}

impl ApiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pagination: pagination::PaginationState {
                config: Arc::new(config.pagination.clone()),
            },
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<ApiState> for pagination::PaginationState {
    fn from_ref(s: &ApiState) -> Self {
        s.pagination.clone()
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState {
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        pagination::get_window,
        catalog::normalize_categories,
        catalog::page_products,
        catalog::banner_products,
    ),
    components(
        schemas(
            PageItem,
            health::HealthResponse,
            pagination::WindowResponse,
            catalog::NormalizeCategoriesRequest,
            catalog::CategoriesResponse,
            catalog::ProductPageRequest,
            catalog::ProductPageResponse,
            catalog::BannerRequest,
            crate::domain::catalog::Product,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Pagination", description = "Compact page-button windows for paginated views"),
        (name = "Catalog", description = "Category normalization and public catalog pages"),
    ),
    info(
        title = "Storefront Pager API",
        version = "1.0.0",
        description = "Pagination windows and catalog helpers for the storefront back office",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(config: &AppConfig) -> Router {
    let state = ApiState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/pagination/window", get(pagination::get_window))
        .route(
            "/catalog/categories/normalize",
            post(catalog::normalize_categories),
        )
        .route("/catalog/products/page", post(catalog::page_products))
        .route("/catalog/products/banner", post(catalog::banner_products))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health::health_check))
        .with_state(state)
        .nest("/api/v1", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn app() -> Router {
        create_api_router(&AppConfig::default())
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), req).await
    }

    async fn send_to(router: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn window_pages(body: &Value) -> Vec<Value> {
        body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item.get("page").cloned().unwrap_or(json!("gap")))
            .collect()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn window_for_middle_page() {
        let (status, body) =
            send(get("/api/v1/pagination/window?page=10&total_pages=20&max_visible=7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            window_pages(&body),
            vec![json!(1), json!("gap"), json!(9), json!(10), json!(11), json!("gap"), json!(20)]
        );
        assert_eq!(body["data"]["text"], "1 … 9 [10] 11 … 20");
    }

    #[tokio::test]
    async fn window_defaults_to_wide_slot_count() {
        let (status, body) = send(get("/api/v1/pagination/window?total_pages=7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["max_visible"], 7);
        assert_eq!(body["data"]["current_page"], 1);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn narrow_viewport_uses_fewer_slots() {
        let (status, body) =
            send(get("/api/v1/pagination/window?page=1&total_pages=6&viewport_width=375")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["max_visible"], 5);
        assert_eq!(
            window_pages(&body),
            vec![json!(1), json!(2), json!(3), json!(4), json!("gap"), json!(6)]
        );
    }

    #[tokio::test]
    async fn explicit_max_visible_beats_viewport() {
        let (_, body) = send(get(
            "/api/v1/pagination/window?total_pages=6&viewport_width=375&max_visible=7",
        ))
        .await;
        assert_eq!(body["data"]["max_visible"], 7);
    }

    #[tokio::test]
    async fn page_past_end_is_clamped() {
        let (status, body) =
            send(get("/api/v1/pagination/window?page=50&total_pages=20")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["current_page"], 20);
    }

    #[tokio::test]
    async fn zero_total_pages_is_422() {
        let (status, body) = send(get("/api/v1/pagination/window?total_pages=0")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn zero_max_visible_is_422() {
        let (status, _) =
            send(get("/api/v1/pagination/window?total_pages=5&max_visible=0")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_total_pages_is_400() {
        let (status, _) = send(get("/api/v1/pagination/window?page=2")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn normalize_categories_endpoint() {
        let (status, body) = send(post_json(
            "/api/v1/catalog/categories/normalize",
            json!({"categories": ["Shoes ", "bags", "", "Shoes"]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["categories"], json!(["bags", "Shoes"]));
    }

    #[tokio::test]
    async fn product_page_skips_disabled_products() {
        let products: Vec<Value> = (1..=25)
            .map(|i| {
                let category = if i % 2 == 0 { "Even" } else { "Odd" };
                let enabled = i != 3;
                json!({
                    "id": i.to_string(),
                    "name": format!("Item {}", i),
                    "category": category,
                    "enabled": enabled,
                })
            })
            .collect();

        let (status, body) = send(post_json(
            "/api/v1/catalog/products/page",
            json!({"products": products, "page": 2, "limit": 10}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let page = &body["data"]["page"];
        assert_eq!(page["total"], 24);
        assert_eq!(page["total_pages"], 3);
        assert_eq!(page["page"], 2);
        assert_eq!(page["items"].as_array().unwrap().len(), 10);
        assert_eq!(page["items"][0]["id"], "12");
        assert_eq!(body["data"]["categories"], json!(["Even", "Odd"]));
    }

    #[tokio::test]
    async fn configured_policy_applies_to_every_window() {
        let mut config = AppConfig::default();
        config.pagination.edge_fill = 0;
        let router = create_api_router(&config);

        let (status, window) = send_to(
            router.clone(),
            get("/api/v1/pagination/window?page=1&total_pages=20&max_visible=7"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let products: Vec<Value> = (1..=20)
            .map(|i| json!({"id": i.to_string(), "name": format!("Item {}", i)}))
            .collect();
        let (status, page) = send_to(
            router,
            post_json(
                "/api/v1/catalog/products/page",
                json!({"products": products, "page": 1, "limit": 1, "max_visible": 7}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let expected = vec![json!(1), json!(2), json!("gap"), json!(20)];
        assert_eq!(window_pages(&window), expected);
        let catalog_pages: Vec<Value> = page["data"]["page"]["pages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item.get("page").cloned().unwrap_or(json!("gap")))
            .collect();
        assert_eq!(catalog_pages, expected);
    }

    #[tokio::test]
    async fn product_page_zero_limit_is_422() {
        let (status, _) = send(post_json(
            "/api/v1/catalog/products/page",
            json!({"products": [], "limit": 0}),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn banner_endpoint_filters() {
        let (status, body) = send(post_json(
            "/api/v1/catalog/products/banner",
            json!({"products": [
                {"id": "a", "name": "A", "banner": true},
                {"id": "b", "name": "B", "banner": true, "enabled": false},
                {"id": "c", "name": "C"}
            ]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let resp = app().oneshot(get("/health")).await.unwrap();
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = send(get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/pagination/window"].is_object());
    }
}
