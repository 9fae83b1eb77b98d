use serde::{Deserialize, Serialize};

/// Distinct filter values derived from the loaded dataset at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    /// Distinct channel names, sorted
    pub channels: Vec<String>,
    /// Distinct product names, sorted
    pub products: Vec<String>,
    /// Distinct years, ascending
    pub years: Vec<i32>,
    /// Preselected year (the latest one present in the data)
    pub default_year: Option<i32>,
}

/// Current filter selection, sent by the dashboard on every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    /// Selected channels; empty means "nothing selected", not "all"
    #[serde(default)]
    pub channels: Vec<String>,
    /// Selected products; empty means "nothing selected", not "all"
    #[serde(default)]
    pub products: Vec<String>,
    /// Selected year for the per-month breakdown chart
    #[serde(default)]
    pub year: Option<i32>,
}

/// All seven dashboard outputs (3 KPI cards + 6 charts), published as one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// KPI cards; empty when the selection yields no data
    pub kpis: Vec<KpiCard>,
    /// Always six specs, in display order; titles are present even without data
    pub charts: Vec<ChartSpec>,
}

/// Single KPI card: title plus an already-formatted display value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    /// Stable identifier (e.g. "total_sales")
    pub id: String,
    pub title: String,
    pub value: String,
}

/// How the frontend should draw a chart's series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Histogram,
}

/// Declarative chart description: the backend computes, the frontend renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Stable identifier (e.g. "top_clients")
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `None` renders as a centered "no data" annotation under the title
    pub data: Option<ChartData>,
}

/// Plotted series of a single chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
}

/// One category/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category label on the x axis
    pub x: String,
    /// `None` keeps the axis label but draws nothing (missing, not zero)
    pub y: Option<f64>,
}
