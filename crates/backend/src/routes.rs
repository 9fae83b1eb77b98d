use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::system::context::AppContext;

/// Wires every route of the application
pub fn configure_routes(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SALES DASHBOARD
        // ========================================
        .route(
            "/api/sales/options",
            get(handlers::sales_overview::get_options),
        )
        .route(
            "/api/sales/overview",
            post(handlers::sales_overview::compute_overview),
        )
        // ========================================
        // PROFILE REPORT
        // ========================================
        .route("/api/report/generate", post(handlers::report::generate))
        .with_state(ctx)
}
