//! JSON extractor running an ordered validation chain.

use crate::errors::AppError;
use crate::validation::ValidateChain;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor that deserializes a loosely-typed payload and runs its
/// [`ValidateChain`], handing the handler the strongly-typed result.
///
/// Every failed rule is reported at once, in declaration order, as a 400
/// `{"errors": [...]}` response.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create_product(
///     ValidatedJson(payload): ValidatedJson<CreateProductPayload>,
/// ) -> String {
///     format!("Creating product: {}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T: ValidateChain>(pub T::Valid);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateChain,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        match data.validate() {
            Ok(valid) => Ok(ValidatedJson(valid)),
            Err(errors) => Err(AppError::Validation(errors).into_response()),
        }
    }
}
