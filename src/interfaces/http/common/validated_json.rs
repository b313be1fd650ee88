//! JSON body extractor for the `/api/v1` endpoints
//!
//! Decodes with `axum::Json`, then applies the DTO's validation rules.
//! Refusals are answered with the `ApiResponse` error envelope.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::{ApiResponse, BodyRejection};

/// A JSON body that decoded and passed validation.
pub struct ValidatedJson<T>(pub T);

/// Refused JSON body, rendered as `{"success": false, "error": ...}`.
#[derive(Debug)]
pub struct ApiRejection(pub BodyRejection);

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let error = match self.0 {
            BodyRejection::Malformed(reason) => format!("Invalid JSON: {}", reason),
            BodyRejection::Invalid(messages) => messages.join("; "),
        };
        (status, Json(ApiResponse::<()>::error(error))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiRejection(BodyRejection::Malformed(e.body_text())))?;
        BodyRejection::check(body).map(ValidatedJson).map_err(ApiRejection)
    }
}
