use contracts::dashboards::d100_sales_overview::{
    ChartData, ChartKind, ChartPoint, ChartSpec, KpiCard, SalesOverviewResponse,
};

use super::service::{AggregateResult, Aggregates, FilterSelection};
use crate::shared::format::{format_euro, format_number, format_percent, month_abbr};

/// Number of equal-width buckets in the margin histogram.
const HISTOGRAM_BINS: usize = 25;

/// Maps a pipeline result to the renderable response: three KPI cards and
/// six chart specs. Chart titles are present even without data, so the
/// frontend can annotate an empty figure under the right heading.
pub fn present(result: &AggregateResult, selection: &FilterSelection) -> SalesOverviewResponse {
    match result {
        AggregateResult::NoData => SalesOverviewResponse {
            kpis: Vec::new(),
            charts: vec![
                top_clients_spec(None),
                sales_over_time_spec(None),
                margin_histogram_spec(None),
                sales_by_year_spec(None),
                sales_by_month_spec(None),
                selected_year_spec(None, selection.year),
            ],
        },
        AggregateResult::Data(agg) => SalesOverviewResponse {
            kpis: kpi_cards(agg),
            charts: vec![
                top_clients_spec(Some(agg)),
                sales_over_time_spec(Some(agg)),
                margin_histogram_spec(Some(agg)),
                sales_by_year_spec(Some(agg)),
                sales_by_month_spec(Some(agg)),
                selected_year_spec(
                    agg.sales_by_month_in_selected_year.as_deref(),
                    selection.year,
                ),
            ],
        },
    }
}

fn kpi_cards(agg: &Aggregates) -> Vec<KpiCard> {
    vec![
        KpiCard {
            id: "total_sales".to_string(),
            title: "Total Sales".to_string(),
            value: format_euro(agg.total_sales),
        },
        KpiCard {
            id: "average_margin".to_string(),
            title: "Average Margin".to_string(),
            value: agg
                .average_margin_percent
                .map(format_percent)
                .unwrap_or_else(|| "—".to_string()),
        },
        KpiCard {
            id: "client_count".to_string(),
            title: "Clients".to_string(),
            value: format_number(agg.distinct_client_count as i64),
        },
    ]
}

fn top_clients_spec(agg: Option<&Aggregates>) -> ChartSpec {
    ChartSpec {
        id: "top_clients".to_string(),
        kind: ChartKind::Bar,
        title: "Top 10 Clients by Sales".to_string(),
        x_label: "Client".to_string(),
        y_label: "Sales".to_string(),
        data: agg.map(|agg| ChartData {
            points: agg
                .top_clients_by_sales
                .iter()
                .map(|entry| ChartPoint {
                    x: entry.client.clone(),
                    y: Some(entry.sales),
                })
                .collect(),
        }),
    }
}

fn sales_over_time_spec(agg: Option<&Aggregates>) -> ChartSpec {
    ChartSpec {
        id: "sales_over_time".to_string(),
        kind: ChartKind::Line,
        title: "Sales over Time (Monthly)".to_string(),
        x_label: "Month".to_string(),
        y_label: "Sales".to_string(),
        data: agg.map(|agg| ChartData {
            points: agg
                .sales_by_month
                .iter()
                .map(|(year_month, sales)| ChartPoint {
                    x: year_month.format("%Y-%m").to_string(),
                    y: Some(*sales),
                })
                .collect(),
        }),
    }
}

fn margin_histogram_spec(agg: Option<&Aggregates>) -> ChartSpec {
    ChartSpec {
        id: "margin_distribution".to_string(),
        kind: ChartKind::Histogram,
        title: "Margin Distribution (%)".to_string(),
        x_label: "Margin".to_string(),
        y_label: "Rows".to_string(),
        data: agg.map(|agg| ChartData {
            points: histogram_points(&agg.margin_distribution, HISTOGRAM_BINS),
        }),
    }
}

fn sales_by_year_spec(agg: Option<&Aggregates>) -> ChartSpec {
    ChartSpec {
        id: "sales_by_year".to_string(),
        kind: ChartKind::Bar,
        title: "Sales by Year".to_string(),
        x_label: "Year".to_string(),
        y_label: "Sales".to_string(),
        data: agg.map(|agg| ChartData {
            points: agg
                .sales_by_year
                .iter()
                .map(|(year, sales)| ChartPoint {
                    x: year.to_string(),
                    y: Some(*sales),
                })
                .collect(),
        }),
    }
}

fn sales_by_month_spec(agg: Option<&Aggregates>) -> ChartSpec {
    ChartSpec {
        id: "sales_by_month".to_string(),
        kind: ChartKind::Bar,
        title: "Sales by Month".to_string(),
        x_label: "Month".to_string(),
        y_label: "Sales".to_string(),
        data: agg.map(|agg| ChartData {
            points: agg
                .sales_by_month_of_year
                .iter()
                .map(|(month, sales)| ChartPoint {
                    x: month.to_string(),
                    y: Some(*sales),
                })
                .collect(),
        }),
    }
}

fn selected_year_spec(
    months: Option<&[super::service::MonthSales]>,
    year: Option<i32>,
) -> ChartSpec {
    let title = match year {
        Some(year) => format!("Sales by Month (Year {year})"),
        None => "Sales by Month (Selected Year)".to_string(),
    };
    ChartSpec {
        id: "sales_by_month_in_year".to_string(),
        kind: ChartKind::Bar,
        title,
        x_label: "Month".to_string(),
        y_label: "Sales".to_string(),
        data: months.map(|months| ChartData {
            points: months
                .iter()
                .map(|entry| ChartPoint {
                    x: month_abbr(entry.month).to_string(),
                    y: entry.sales,
                })
                .collect(),
        }),
    }
}

/// Buckets raw margin values into `bins` equal-width counts over the
/// observed range. A degenerate range collapses to a single bucket.
fn histogram_points(values: &[f64], bins: usize) -> Vec<ChartPoint> {
    let Some(first) = values.first() else {
        return Vec::new();
    };
    let (min, max) = values.iter().fold((*first, *first), |(lo, hi), v| {
        (lo.min(*v), hi.max(*v))
    });

    if min == max {
        return vec![ChartPoint {
            x: format_percent(min),
            y: Some(values.len() as f64),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| ChartPoint {
            x: format_percent(min + i as f64 * width),
            y: Some(count as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_overview::service::{Aggregates, MonthSales};

    fn sample_aggregates() -> Aggregates {
        Aggregates {
            total_sales: 1234.56,
            average_margin_percent: Some(0.2345),
            distinct_client_count: 7,
            top_clients_by_sales: Vec::new(),
            sales_by_month: vec![(chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 10.0)],
            margin_distribution: vec![0.1, 0.2, 0.2, 0.4],
            sales_by_year: vec![(2023, 10.0)],
            sales_by_month_of_year: vec![(1, 10.0)],
            sales_by_month_in_selected_year: Some(vec![MonthSales {
                month: 1,
                sales: Some(10.0),
            }]),
        }
    }

    fn sample_selection() -> FilterSelection {
        FilterSelection {
            channels: vec!["A".to_string()],
            products: vec!["X".to_string()],
            year: Some(2023),
        }
    }

    #[test]
    fn test_no_data_keeps_all_six_titles() {
        let response = present(&AggregateResult::NoData, &sample_selection());
        assert!(response.kpis.is_empty());
        assert_eq!(response.charts.len(), 6);
        assert!(response.charts.iter().all(|c| c.data.is_none()));
        assert!(response
            .charts
            .iter()
            .any(|c| c.title == "Sales by Month (Year 2023)"));
    }

    #[test]
    fn test_kpi_formatting() {
        let response = present(
            &AggregateResult::Data(sample_aggregates()),
            &sample_selection(),
        );
        let values: Vec<&str> = response.kpis.iter().map(|k| k.value.as_str()).collect();
        assert_eq!(values, vec!["1.235 €", "23.45%", "7"]);
    }

    #[test]
    fn test_undefined_margin_renders_placeholder() {
        let mut agg = sample_aggregates();
        agg.average_margin_percent = None;
        let response = present(&AggregateResult::Data(agg), &sample_selection());
        assert_eq!(response.kpis[1].value, "—");
    }

    #[test]
    fn test_empty_year_view_marks_only_that_chart() {
        let mut agg = sample_aggregates();
        agg.sales_by_month_in_selected_year = None;
        let response = present(&AggregateResult::Data(agg), &sample_selection());
        let year_chart = response
            .charts
            .iter()
            .find(|c| c.id == "sales_by_month_in_year")
            .expect("year chart");
        assert!(year_chart.data.is_none());
        let others_with_data = response
            .charts
            .iter()
            .filter(|c| c.id != "sales_by_month_in_year" && c.data.is_some())
            .count();
        assert_eq!(others_with_data, 5);
    }

    #[test]
    fn test_month_labels_use_abbreviations() {
        let response = present(
            &AggregateResult::Data(sample_aggregates()),
            &sample_selection(),
        );
        let year_chart = response
            .charts
            .iter()
            .find(|c| c.id == "sales_by_month_in_year")
            .expect("year chart");
        let data = year_chart.data.as_ref().expect("data");
        assert_eq!(data.points[0].x, "Jan");
    }

    #[test]
    fn test_histogram_bucketing() {
        let values = vec![0.0, 0.1, 0.5, 1.0];
        let points = histogram_points(&values, 25);
        assert_eq!(points.len(), 25);
        let total: f64 = points.iter().filter_map(|p| p.y).sum();
        assert_eq!(total, 4.0);
        // Maximum lands in the last bucket, not out of range
        assert_eq!(points[24].y, Some(1.0));
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let points = histogram_points(&[0.3, 0.3, 0.3], 25);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].y, Some(3.0));
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram_points(&[], 25).is_empty());
    }

    #[test]
    fn test_wire_shape_of_chart_kinds() {
        let response = present(
            &AggregateResult::Data(sample_aggregates()),
            &sample_selection(),
        );
        let value = serde_json::to_value(&response).expect("serialize");
        let kinds: Vec<&str> = value["charts"]
            .as_array()
            .expect("charts array")
            .iter()
            .map(|chart| chart["kind"].as_str().expect("kind"))
            .collect();
        assert_eq!(
            kinds,
            vec!["bar", "line", "histogram", "bar", "bar", "bar"]
        );
    }
}
