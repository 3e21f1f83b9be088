pub mod handlers;
pub mod responses;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Single-message error envelope: `{"error": "..."}`.
///
/// Used for not-found, bad-request, and internal failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Validation error envelope: `{"errors": [{"field", "message"}, ...]}`.
///
/// Carries every failed check of the validation chain, in declaration order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorListResponse {
    pub errors: Vec<FieldError>,
}

/// Application error type that converts into HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("validation failed ({} errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::info!(count = errors.len(), "Request validation failed");
                (StatusCode::BAD_REQUEST, Json(ErrorListResponse { errors })).into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                error_response(StatusCode::NOT_FOUND, msg)
            }
            AppError::InternalServerError(msg) => {
                // Log the detail, answer with a generic message: internals
                // never leak to clients.
                tracing::error!("Internal server error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                error_response(StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        }
    }
}

/// Build a `{"error": message}` response with the given status.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let response = AppError::NotFound("Product not founded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Product not founded"}));
    }

    #[tokio::test]
    async fn test_validation_envelope_preserves_order() {
        let response = AppError::Validation(vec![
            FieldError::new("name", "name cannot be empty"),
            FieldError::new("price", "price must be a number"),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["field"], "name");
        assert_eq!(errors[1]["field"], "price");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response =
            AppError::InternalServerError("connection refused (db:5432)".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
