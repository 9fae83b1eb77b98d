use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use contracts::usecases::u900_profile_report::ProfileReportResponse;

use crate::system::context::AppContext;
use crate::usecases::u900_profile_report;

/// POST /api/report/generate
pub async fn generate(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<ProfileReportResponse>, StatusCode> {
    match u900_profile_report::service::generate(&ctx.config, &ctx.table) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to generate profile report: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
