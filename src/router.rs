use crate::handlers::{
    health::health_check,
    invoices::{create_invoice, get_bad_debt, get_invoices, transfer_invoice},
    reminders::get_reminders,
    report::get_report,
    session::end_session,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Invoice routes
        .route("/api/v1/invoices", post(create_invoice).get(get_invoices))
        .route("/api/v1/invoices/transfer", post(transfer_invoice))
        .route("/api/v1/bad-debt", get(get_bad_debt))
        // Report routes
        .route("/api/v1/report", get(get_report))
        .route("/api/v1/reminders", get(get_reminders))
        // Session routes
        .route("/api/v1/session", delete(end_session))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
