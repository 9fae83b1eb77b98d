use std::fmt::Write as _;

use super::profile::{CategoricalSummary, ColumnProfile, NumericSummary};

/// Renders the column profiles as a single self-contained HTML page.
pub fn render(profiles: &[ColumnProfile], row_count: usize, generated_at: &str) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dataset Profile Report</title>
<style>
  body {{ font-family: system-ui, 'Segoe UI', Roboto, Arial, sans-serif; margin: 24px; color: #222; }}
  h1 {{ margin-bottom: 0; }}
  .meta {{ color: #666; margin-top: 4px; margin-bottom: 24px; }}
  .column {{ background: #f6f6f6; border-radius: 12px; padding: 14px 18px; margin-bottom: 14px; }}
  .column h2 {{ margin: 0 0 8px 0; font-size: 1.05rem; }}
  .kind {{ color: #888; font-size: 0.8rem; margin-left: 8px; font-weight: 400; }}
  table {{ border-collapse: collapse; }}
  td {{ padding: 2px 14px 2px 0; font-size: 0.9rem; }}
  td.label {{ color: #666; }}
</style>
</head>
<body>
<h1>Dataset Profile Report</h1>
<p class="meta">{row_count} rows &middot; {columns} columns &middot; generated {generated_at}</p>
"##,
        row_count = row_count,
        columns = profiles.len(),
        generated_at = generated_at,
    );

    for profile in profiles {
        match profile {
            ColumnProfile::Numeric(summary) => render_numeric(&mut out, summary),
            ColumnProfile::Categorical(summary) => render_categorical(&mut out, summary),
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_numeric(out: &mut String, s: &NumericSummary) {
    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{v:.4}"),
        None => "—".to_string(),
    };
    let _ = write!(
        out,
        r#"<div class="column">
<h2>{name}<span class="kind">numeric</span></h2>
<table>
<tr><td class="label">values</td><td>{count}</td><td class="label">missing</td><td>{missing}</td><td class="label">distinct</td><td>{distinct}</td></tr>
<tr><td class="label">min</td><td>{min}</td><td class="label">max</td><td>{max}</td><td class="label">mean</td><td>{mean}</td><td class="label">std</td><td>{std}</td></tr>
</table>
</div>
"#,
        name = s.name,
        count = s.count,
        missing = s.missing,
        distinct = s.distinct,
        min = fmt(s.min),
        max = fmt(s.max),
        mean = fmt(s.mean),
        std = fmt(s.std),
    );
}

fn render_categorical(out: &mut String, s: &CategoricalSummary) {
    let top: String = s
        .top
        .iter()
        .map(|(value, count)| format!("{value} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = write!(
        out,
        r#"<div class="column">
<h2>{name}<span class="kind">categorical</span></h2>
<table>
<tr><td class="label">values</td><td>{count}</td><td class="label">missing</td><td>{missing}</td><td class="label">distinct</td><td>{distinct}</td></tr>
<tr><td class="label">top</td><td colspan="5">{top}</td></tr>
</table>
</div>
"#,
        name = s.name,
        count = s.count,
        missing = s.missing,
        distinct = s.distinct,
        top = if top.is_empty() { "—".to_string() } else { top },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Row, Table};
    use crate::usecases::u900_profile_report::profile::profile_table;

    #[test]
    fn test_render_is_a_full_document_with_all_columns() {
        let table = Table::new(vec![Row {
            year: Some(2023),
            month: Some(1),
            channel: Some("Retail".into()),
            product: Some("Widget".into()),
            client: Some("C1".into()),
            sales: Some(10.0),
            margin_percent: Some(0.2),
            margin_value: Some(2.0),
            year_month: None,
        }]);
        let html = render(&profile_table(&table), table.len(), "2023-01-01 00:00 UTC");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        for column in [
            "Year",
            "Month",
            "Channel",
            "Product",
            "Client",
            "Sales",
            "MarginPercent",
            "MarginValue",
        ] {
            assert!(html.contains(column), "missing column {column}");
        }
        assert!(html.contains("1 rows"));
    }
}
