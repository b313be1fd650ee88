//! Bill JSON API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    AdjustmentRequestDto, BillDetailsResponse, BillRetrievalRequest, PaymentReceiptResponse,
    PaymentRequestDto,
};
use crate::application::{AdjustmentService, BillRetrievalService, PaymentService};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Services behind the bill pages and JSON endpoints
#[derive(Clone)]
pub struct BillingState {
    pub retrieval: Arc<BillRetrievalService>,
    pub payments: Arc<PaymentService>,
    pub adjustments: Arc<AdjustmentService>,
}

/// Map a service error to an API error response.
///
/// Storage details are logged and replaced with a generic message.
pub(crate) fn api_error(err: DomainError) -> ApiError {
    let (status, message) = match &err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        DomainError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, err.to_string()),
        DomainError::Storage(_) => {
            tracing::error!("Request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    };
    (status, Json(ApiResponse::error(message)))
}

#[utoipa::path(
    post,
    path = "/api/v1/bills/retrieve",
    tag = "Bills",
    request_body = BillRetrievalRequest,
    responses(
        (status = 200, description = "Bill details", body = ApiResponse<BillDetailsResponse>),
        (status = 404, description = "No bill for this connection and period"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn retrieve_bill(
    State(state): State<BillingState>,
    ValidatedJson(req): ValidatedJson<BillRetrievalRequest>,
) -> Result<Json<ApiResponse<BillDetailsResponse>>, ApiError> {
    let query = req.to_query();
    match state.retrieval.retrieve(&query).await {
        Ok(Some(details)) => Ok(Json(ApiResponse::success(details.into()))),
        Ok(None) => Err(api_error(DomainError::NotFound {
            entity: "Bill",
            field: "connection_id/month/year",
            value: query.key.to_string(),
        })),
        Err(e) => Err(api_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    request_body = PaymentRequestDto,
    responses(
        (status = 200, description = "Payment receipt", body = ApiResponse<PaymentReceiptResponse>),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn pay_bill(
    State(state): State<BillingState>,
    ValidatedJson(req): ValidatedJson<PaymentRequestDto>,
) -> Result<Json<ApiResponse<PaymentReceiptResponse>>, ApiError> {
    let receipt = state.payments.pay(req.into()).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(receipt.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/adjustments",
    tag = "Adjustments",
    request_body = AdjustmentRequestDto,
    responses(
        (status = 422, description = "Validation error"),
        (status = 501, description = "Adjustments are not implemented")
    )
)]
pub async fn adjust_bill(
    State(state): State<BillingState>,
    ValidatedJson(req): ValidatedJson<AdjustmentRequestDto>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.adjustments.adjust(req.into()).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}
