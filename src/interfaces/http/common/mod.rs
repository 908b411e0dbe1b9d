//! Shared HTTP types: response envelope, error mapping, validated extractors

pub mod validated;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::DomainError;

pub use validated::{ValidatedJson, ValidatedQuery, ValidationRejection};

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Handler result carrying the envelope on both sides
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiErrorResponse>;

/// Map a domain error to `400 Bad Request`.
pub fn domain_error(err: DomainError) -> ApiErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(err.to_string())),
    )
}
