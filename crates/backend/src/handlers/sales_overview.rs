use std::sync::Arc;

use axum::{extract::State, Json};
use contracts::dashboards::d100_sales_overview::{
    FilterOptionsResponse, SalesOverviewRequest, SalesOverviewResponse,
};

use crate::dashboards::d100_sales_overview::{presenter, service};
use crate::system::context::AppContext;

/// GET /api/sales/options
pub async fn get_options(State(ctx): State<Arc<AppContext>>) -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse {
        channels: ctx.options.channels.clone(),
        products: ctx.options.products.clone(),
        years: ctx.options.years.clone(),
        default_year: ctx.options.default_year(),
    })
}

/// POST /api/sales/overview
///
/// Recomputes all seven outputs for the submitted selection. Sparse or
/// all-excluding selections are valid requests that produce the no-data
/// presentation, so this endpoint has no error responses.
pub async fn compute_overview(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SalesOverviewRequest>,
) -> Json<SalesOverviewResponse> {
    let selection = service::FilterSelection {
        channels: request.channels,
        products: request.products,
        year: request.year,
    };
    let result = service::compute(&ctx.table, &selection);
    Json(presenter::present(&result, &selection))
}
