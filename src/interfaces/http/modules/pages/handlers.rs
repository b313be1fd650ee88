use axum::{extract::State, http::StatusCode, response::Html};
use tracing::{error, warn};

use crate::domain::{AdjustmentRequest, DomainError};
use crate::interfaces::http::common::ValidatedForm;
use crate::interfaces::http::modules::bills::{
    AdjustmentRequestDto, BillRetrievalRequest, BillingState, PaymentRequestDto,
};
use crate::interfaces::http::views;

type PageResult = Result<Html<String>, (StatusCode, Html<String>)>;

/// Render a service error as an HTML error page.
///
/// Storage failures are logged and shown with a generic message only.
fn page_error(err: DomainError) -> (StatusCode, Html<String>) {
    let (status, title, message) = match &err {
        DomainError::Storage(_) => {
            error!("Page request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "The request could not be completed. Please try again later.".to_string(),
            )
        }
        DomainError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please correct the form",
            msg.clone(),
        ),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not found", err.to_string()),
        DomainError::NotImplemented(_) => {
            (StatusCode::NOT_IMPLEMENTED, "Not available", err.to_string())
        }
    };
    (status, Html(views::error_page(title, &[message])))
}

pub async fn index() -> Html<String> {
    Html(views::index())
}

// ── Bill retrieval ─────────────────────────────────────────────

pub async fn bill_retrieval_form() -> Html<String> {
    Html(views::retrieval_form())
}

pub async fn bill_retrieval(
    State(state): State<BillingState>,
    ValidatedForm(form): ValidatedForm<BillRetrievalRequest>,
) -> PageResult {
    let query = form.to_query();
    match state.retrieval.retrieve(&query).await {
        Ok(Some(details)) => Ok(Html(views::bill_details(&details))),
        Ok(None) => Ok(Html(views::bill_not_found(&query.key))),
        Err(e) => Err(page_error(e)),
    }
}

// ── Bill payment ───────────────────────────────────────────────

pub async fn bill_payment_form(State(state): State<BillingState>) -> PageResult {
    let methods = state.payments.payment_methods().await.map_err(page_error)?;
    Ok(Html(views::payment_form(&methods)))
}

pub async fn bill_payment(
    State(state): State<BillingState>,
    ValidatedForm(form): ValidatedForm<PaymentRequestDto>,
) -> PageResult {
    let receipt = state.payments.pay(form.into()).await.map_err(page_error)?;
    Ok(Html(views::receipt(&receipt)))
}

// ── Bill adjustment ────────────────────────────────────────────

pub async fn bill_adjustment_form() -> Html<String> {
    Html(views::adjustment_form())
}

pub async fn bill_adjustment(
    State(state): State<BillingState>,
    ValidatedForm(form): ValidatedForm<AdjustmentRequestDto>,
) -> (StatusCode, Html<String>) {
    let request: AdjustmentRequest = form.into();
    let page = views::adjustment_not_implemented(&request);
    match state.adjustments.adjust(request).await {
        Err(DomainError::NotImplemented(what)) => {
            warn!("Rejected adjustment: {} not implemented", what);
            (StatusCode::NOT_IMPLEMENTED, Html(page))
        }
        Err(e) => page_error(e),
        Ok(()) => (
            StatusCode::OK,
            Html(views::layout("Adjustment submitted", "<p>The adjustment was applied.</p>")),
        ),
    }
}
