use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;

use crate::domain::dataset::{FilterOptions, Row, Table};

/// Current user-chosen restriction of the dataset.
///
/// Empty channel or product lists mean "nothing selected" (an all-excluding
/// state the UI can reach by clearing a multi-select), not "everything".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub channels: Vec<String>,
    pub products: Vec<String>,
    pub year: Option<i32>,
}

impl FilterSelection {
    /// Startup default: all observed channels and products, latest year.
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            channels: options.channels.clone(),
            products: options.products.clone(),
            year: options.default_year(),
        }
    }
}

/// One client with its summed sales.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSales {
    pub client: String,
    pub sales: f64,
}

/// Per-month sum within the selected year. `sales` stays `None` for a month
/// whose rows are all missing their sales amount, which is distinct from a
/// month that is absent from the data entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSales {
    pub month: u32,
    pub sales: Option<f64>,
}

/// Everything the dashboard shows for one filter selection, computed fresh
/// on every invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateResult {
    /// All-excluding selection or an empty filtered set
    NoData,
    Data(Aggregates),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub total_sales: f64,
    /// `None` when every filtered row is missing its margin
    pub average_margin_percent: Option<f64>,
    pub distinct_client_count: usize,
    /// At most 10 entries, descending by summed sales; ties keep the order
    /// in which clients first appear in the filtered scan
    pub top_clients_by_sales: Vec<ClientSales>,
    /// Monthly time series, ascending; rows without a time key are excluded
    /// from this view only
    pub sales_by_month: Vec<(NaiveDate, f64)>,
    /// Non-missing margin values of the filtered set, for histogram bucketing
    pub margin_distribution: Vec<f64>,
    pub sales_by_year: Vec<(i32, f64)>,
    /// Sums per calendar month (1..=12) across all years
    pub sales_by_month_of_year: Vec<(u32, f64)>,
    /// `None` when the selected year has no filtered rows at all
    pub sales_by_month_in_selected_year: Option<Vec<MonthSales>>,
}

/// The aggregation pipeline: a pure function of the read-only table and the
/// current selection. Sparse and empty inputs degrade to `NoData`, never to
/// an error.
pub fn compute(table: &Table, selection: &FilterSelection) -> AggregateResult {
    // Guard against an accidental all-excluding filter state without
    // scanning the table
    if selection.channels.is_empty() || selection.products.is_empty() {
        return AggregateResult::NoData;
    }

    let channels: HashSet<&str> = selection.channels.iter().map(String::as_str).collect();
    let products: HashSet<&str> = selection.products.iter().map(String::as_str).collect();

    let filtered: Vec<&Row> = table
        .rows
        .iter()
        .filter(|row| {
            row.channel
                .as_deref()
                .map_or(false, |c| channels.contains(c))
                && row
                    .product
                    .as_deref()
                    .map_or(false, |p| products.contains(p))
        })
        .collect();

    if filtered.is_empty() {
        return AggregateResult::NoData;
    }

    // KPI scalars. Missing values are excluded, so a selection whose rows
    // all lack sales still totals 0 while the margin average stays undefined.
    let total_sales: f64 = filtered.iter().filter_map(|row| row.sales).sum();

    let margin_distribution: Vec<f64> = filtered
        .iter()
        .filter_map(|row| row.margin_percent)
        .collect();
    let average_margin_percent = if margin_distribution.is_empty() {
        None
    } else {
        Some(margin_distribution.iter().sum::<f64>() / margin_distribution.len() as f64)
    };

    let distinct_client_count = filtered
        .iter()
        .filter_map(|row| row.client.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let top_clients_by_sales = top_clients(&filtered, 10);

    let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in &filtered {
        let Some(key) = row.year_month else { continue };
        *by_month.entry(key).or_insert(0.0) += row.sales.unwrap_or(0.0);
    }

    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for row in &filtered {
        let Some(year) = row.year else { continue };
        *by_year.entry(year).or_insert(0.0) += row.sales.unwrap_or(0.0);
    }

    let mut by_month_of_year: BTreeMap<u32, f64> = BTreeMap::new();
    for row in &filtered {
        let Some(month) = row.month.filter(|m| (1..=12).contains(m)) else {
            continue;
        };
        *by_month_of_year.entry(month).or_insert(0.0) += row.sales.unwrap_or(0.0);
    }

    let sales_by_month_in_selected_year = selected_year_months(&filtered, selection.year);

    AggregateResult::Data(Aggregates {
        total_sales,
        average_margin_percent,
        distinct_client_count,
        top_clients_by_sales,
        sales_by_month: by_month.into_iter().collect(),
        margin_distribution,
        sales_by_year: by_year.into_iter().collect(),
        sales_by_month_of_year: by_month_of_year.into_iter().collect(),
        sales_by_month_in_selected_year,
    })
}

/// Groups by client, sums sales and keeps the `limit` largest. The sort is
/// stable, so equal sums stay in first-appearance order.
fn top_clients(filtered: &[&Row], limit: usize) -> Vec<ClientSales> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for row in filtered {
        let Some(client) = row.client.as_deref() else {
            continue;
        };
        if !sums.contains_key(client) {
            order.push(client);
        }
        *sums.entry(client).or_insert(0.0) += row.sales.unwrap_or(0.0);
    }

    let mut ranked: Vec<ClientSales> = order
        .into_iter()
        .map(|client| ClientSales {
            client: client.to_string(),
            sales: sums[client],
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.sales
            .partial_cmp(&a.sales)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// The per-month breakdown restricted to the selected year.
///
/// A month stays `None` when all of its rows are missing the sales amount
/// (present-but-unknown, not zero). The whole view is `None` only when the
/// year slice itself is empty; the other views remain valid in that case.
fn selected_year_months(filtered: &[&Row], year: Option<i32>) -> Option<Vec<MonthSales>> {
    let year = year?;
    let slice: Vec<&&Row> = filtered.iter().filter(|row| row.year == Some(year)).collect();
    if slice.is_empty() {
        return None;
    }

    let mut by_month: BTreeMap<u32, Option<f64>> = BTreeMap::new();
    for row in slice {
        let Some(month) = row.month.filter(|m| (1..=12).contains(m)) else {
            continue;
        };
        let entry = by_month.entry(month).or_insert(None);
        if let Some(sales) = row.sales {
            *entry = Some(entry.unwrap_or(0.0) + sales);
        }
    }

    Some(
        by_month
            .into_iter()
            .map(|(month, sales)| MonthSales { month, sales })
            .collect(),
    )
}
