//! HTTP router: HTML pages, JSON API, Swagger UI and operational endpoints

use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AdjustmentService, BillRetrievalService, PaymentService};
use crate::config::WebConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;

use super::modules::{bills, health, metrics, pages, request_id};

/// OpenAPI documentation for the JSON API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        bills::retrieve_bill,
        bills::pay_bill,
        bills::adjust_bill,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::DatabaseHealth,
            bills::BillRetrievalRequest,
            bills::BillDetailsResponse,
            bills::TariffLineDto,
            bills::AmountLineDto,
            bills::SubsidyLineDto,
            bills::PriorBillDto,
            bills::PaymentRequestDto,
            bills::PaymentReceiptResponse,
            bills::AdjustmentRequestDto,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database probe"),
        (name = "Bills", description = "Monthly bill retrieval"),
        (name = "Payments", description = "Bill payment receipts"),
        (name = "Adjustments", description = "Officer bill adjustments"),
    ),
    info(
        title = "Utility Billing API",
        version = "1.0.0",
        description = "Bill retrieval, payment and adjustment for utility connections"
    )
)]
pub struct ApiDoc;

/// Everything the router needs from the running service
pub struct RouterDeps {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub metrics: PrometheusHandle,
    pub web: WebConfig,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

/// Build the application router.
pub fn create_router(deps: RouterDeps) -> Router {
    let billing = bills::BillingState {
        retrieval: Arc::new(BillRetrievalService::new(deps.repos.clone())),
        payments: Arc::new(PaymentService::new(deps.repos)),
        adjustments: Arc::new(AdjustmentService::new()),
    };

    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route(
            "/bill-retrieval",
            get(pages::bill_retrieval_form).post(pages::bill_retrieval),
        )
        .route(
            "/bill-payment",
            get(pages::bill_payment_form).post(pages::bill_payment),
        )
        .route(
            "/bill-adjustments",
            get(pages::bill_adjustment_form).post(pages::bill_adjustment),
        )
        .with_state(billing.clone());

    let api_routes = Router::new()
        .route("/bills/retrieve", post(bills::retrieve_bill))
        .route("/payments", post(bills::pay_bill))
        .route("/adjustments", post(bills::adjust_bill))
        .with_state(billing);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: deps.db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::render_metrics))
        .with_state(metrics::MetricsState {
            handle: deps.metrics,
        });

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest_service("/static", ServeDir::new(&deps.web.static_dir))
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&deps.web.cors_origins))
        .layer(middleware::from_fn(request_id::request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
