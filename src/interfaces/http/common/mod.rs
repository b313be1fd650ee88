//! Common HTTP types: response envelope and validating extractors

mod validated_form;
mod validated_json;

pub use validated_form::{PageRejection, ValidatedForm};
pub use validated_json::{ApiRejection, ValidatedJson};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Standard API response envelope
///
/// Every JSON endpoint wraps its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. Omitted on success
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

/// Flatten validator errors into `field: message` strings.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    messages.sort();
    messages
}

/// Why a validating extractor refused a request body.
///
/// Shared by [`ValidatedJson`] and [`ValidatedForm`]; each renders it in
/// its own format.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRejection {
    /// The body could not be decoded into the target type
    Malformed(String),
    /// The body decoded but failed validation, one message per field error
    Invalid(Vec<String>),
}

impl BodyRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Malformed(reason) => vec![reason.clone()],
            Self::Invalid(messages) => messages.clone(),
        }
    }

    /// Run the value's validation rules.
    pub(crate) fn check<T: Validate>(value: T) -> Result<T, Self> {
        match value.validate() {
            Ok(()) => Ok(value),
            Err(errors) => Err(Self::Invalid(validation_messages(&errors))),
        }
    }
}
