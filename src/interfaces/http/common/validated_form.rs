//! Validated form extractor for the HTML pages
//!
//! Same checks as [`super::ValidatedJson`], with refusals rendered as HTML
//! error pages: 400 for an undecodable body, 422 for values that fail
//! validation.

use axum::extract::{FromRequest, Request};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::BodyRejection;
use crate::interfaces::http::views;

pub struct ValidatedForm<T>(pub T);

/// Refused form submission, rendered as an error page.
#[derive(Debug)]
pub struct PageRejection(pub BodyRejection);

impl IntoResponse for PageRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let page = match self.0 {
            BodyRejection::Malformed(reason) => {
                tracing::debug!("Rejected form submission: {}", reason);
                views::error_page(
                    "Invalid request",
                    &[format!("The submitted form could not be read: {}", reason)],
                )
            }
            BodyRejection::Invalid(messages) => views::error_page("Please correct the form", &messages),
        };
        (status, Html(page)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = PageRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| PageRejection(BodyRejection::Malformed(e.body_text())))?;
        BodyRejection::check(value).map(ValidatedForm).map_err(PageRejection)
    }
}

// ── Tests ──────────────────────────────────────────────────────
