use contracts::dashboards::d100_sales_overview::{
    FilterOptionsResponse, SalesOverviewRequest, SalesOverviewResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the selectable filter values derived from the loaded dataset
pub async fn get_filter_options() -> Result<FilterOptionsResponse, String> {
    let url = api_url("/api/sales/options");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Recompute all dashboard outputs for the given selection
pub async fn compute_overview(
    request: &SalesOverviewRequest,
) -> Result<SalesOverviewResponse, String> {
    let url = api_url("/api/sales/overview");

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
