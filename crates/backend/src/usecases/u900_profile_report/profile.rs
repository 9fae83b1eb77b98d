use std::collections::HashMap;

use crate::domain::dataset::Table;

/// Column-level summary of the full, unfiltered table.
#[derive(Debug, Clone)]
pub enum ColumnProfile {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnProfile {
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(s) => &s.name,
            Self::Categorical(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub distinct: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// Sample standard deviation; `None` below two observations
    pub std: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CategoricalSummary {
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub distinct: usize,
    /// Up to five most frequent values, descending by count
    pub top: Vec<(String, usize)>,
}

/// Profiles every dataset column. Month is treated as a categorical label
/// rather than a quantity; averaging month numbers is meaningless.
pub fn profile_table(table: &Table) -> Vec<ColumnProfile> {
    let rows = &table.rows;
    vec![
        ColumnProfile::Numeric(numeric_summary(
            "Year",
            rows.iter().map(|r| r.year.map(f64::from)),
        )),
        ColumnProfile::Categorical(categorical_summary(
            "Month",
            rows.iter().map(|r| r.month.map(|m| m.to_string())),
        )),
        ColumnProfile::Categorical(categorical_summary(
            "Channel",
            rows.iter().map(|r| r.channel.clone()),
        )),
        ColumnProfile::Categorical(categorical_summary(
            "Product",
            rows.iter().map(|r| r.product.clone()),
        )),
        ColumnProfile::Categorical(categorical_summary(
            "Client",
            rows.iter().map(|r| r.client.clone()),
        )),
        ColumnProfile::Numeric(numeric_summary("Sales", rows.iter().map(|r| r.sales))),
        ColumnProfile::Numeric(numeric_summary(
            "MarginPercent",
            rows.iter().map(|r| r.margin_percent),
        )),
        ColumnProfile::Numeric(numeric_summary(
            "MarginValue",
            rows.iter().map(|r| r.margin_value),
        )),
    ]
}

fn numeric_summary(name: &str, cells: impl Iterator<Item = Option<f64>>) -> NumericSummary {
    let mut values = Vec::new();
    let mut missing = 0usize;
    for cell in cells {
        match cell {
            Some(v) => values.push(v),
            None => missing += 1,
        }
    }

    let count = values.len();
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    let distinct = sorted.len();

    let min = sorted.first().copied();
    let max = sorted.last().copied();
    let mean = if count > 0 {
        Some(values.iter().sum::<f64>() / count as f64)
    } else {
        None
    };
    let std = match (mean, count) {
        (Some(mean), n) if n >= 2 => {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            Some(variance.sqrt())
        }
        _ => None,
    };

    NumericSummary {
        name: name.to_string(),
        count,
        missing,
        distinct,
        min,
        max,
        mean,
        std,
    }
}

fn categorical_summary(
    name: &str,
    cells: impl Iterator<Item = Option<String>>,
) -> CategoricalSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut count = 0usize;
    let mut missing = 0usize;
    for cell in cells {
        match cell {
            Some(value) => {
                count += 1;
                if !counts.contains_key(&value) {
                    order.push(value.clone());
                }
                *counts.entry(value).or_insert(0) += 1;
            }
            None => missing += 1,
        }
    }

    let mut top: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let n = counts[&value];
            (value, n)
        })
        .collect();
    let distinct = top.len();
    top.sort_by(|a, b| b.1.cmp(&a.1));
    top.truncate(5);

    CategoricalSummary {
        name: name.to_string(),
        count,
        missing,
        distinct,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Row;

    fn table() -> Table {
        let mut rows = vec![
            Row {
                year: Some(2023),
                month: Some(1),
                channel: Some("Retail".into()),
                sales: Some(10.0),
                ..Default::default()
            },
            Row {
                year: Some(2023),
                month: Some(2),
                channel: Some("Retail".into()),
                sales: Some(30.0),
                ..Default::default()
            },
            Row {
                year: Some(2024),
                month: Some(1),
                channel: Some("Online".into()),
                sales: None,
                ..Default::default()
            },
        ];
        rows.iter_mut().for_each(|r| r.client = Some("C".into()));
        Table::new(rows)
    }

    #[test]
    fn test_numeric_summary() {
        let profiles = profile_table(&table());
        let ColumnProfile::Numeric(sales) = &profiles[5] else {
            panic!("Sales should be numeric");
        };
        assert_eq!(sales.name, "Sales");
        assert_eq!(sales.count, 2);
        assert_eq!(sales.missing, 1);
        assert_eq!(sales.distinct, 2);
        assert_eq!(sales.min, Some(10.0));
        assert_eq!(sales.max, Some(30.0));
        assert_eq!(sales.mean, Some(20.0));
        // Sample std of {10, 30}
        assert!((sales.std.unwrap() - 14.142135623730951).abs() < 1e-9);
    }

    #[test]
    fn test_categorical_summary_top_values() {
        let profiles = profile_table(&table());
        let ColumnProfile::Categorical(channel) = &profiles[2] else {
            panic!("Channel should be categorical");
        };
        assert_eq!(channel.count, 3);
        assert_eq!(channel.missing, 0);
        assert_eq!(channel.distinct, 2);
        assert_eq!(channel.top[0], ("Retail".to_string(), 2));
    }

    #[test]
    fn test_month_is_profiled_as_categorical() {
        let profiles = profile_table(&table());
        assert!(matches!(&profiles[1], ColumnProfile::Categorical(s) if s.name == "Month"));
    }

    #[test]
    fn test_empty_column_has_no_stats() {
        let summary = numeric_summary("x", std::iter::empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.std, None);
        assert_eq!(summary.min, None);
    }
}
