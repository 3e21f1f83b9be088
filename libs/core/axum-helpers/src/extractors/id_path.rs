//! Integer path parameter extractor with automatic validation.

use crate::errors::{responses::messages, AppError};
use crate::validation::FieldError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer `id` path parameters.
///
/// Parses the path segment as an `i64`, answering with the same
/// `{"errors": [...]}` envelope as body validation when it is not an
/// integer. Range checks against the store's key type belong to the
/// domain: an integer too large for the table's key simply identifies
/// no row.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::Validation(vec![FieldError::new(
                "id",
                messages::INVALID_ID,
            )])
            .into_response()),
        }
    }
}
