use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use super::table::{coerce_f64, coerce_i64, coerce_u32, Row, Table};

/// Required dataset columns, located by header label.
const COL_YEAR: &str = "Year";
const COL_MONTH: &str = "Month";
const COL_CHANNEL: &str = "Channel";
const COL_PRODUCT: &str = "Product";
const COL_CLIENT: &str = "Client";
const COL_SALES: &str = "Sales";
const COL_MARGIN_PERCENT: &str = "MarginPercent";
const COL_MARGIN_VALUE: &str = "MarginValue";

/// Fatal dataset-loading failures. Cell-level coercion problems are NOT
/// errors; they degrade to missing values.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    FileNotFound(String),
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset has no worksheet")]
    NoWorksheet,
    #[error("dataset has no data rows")]
    Empty,
    #[error("required column missing: {0}")]
    MissingColumn(&'static str),
}

/// Loads the sales dataset from an `.xlsx`/`.xls` workbook or a `.csv`
/// file, coerces column types and returns the (Year, Month)-sorted table.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let rows = if extension == "csv" {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(Table::new(rows))
}

/// Maps header labels to column indices; every required column must exist.
struct ColumnMap {
    year: usize,
    month: usize,
    channel: usize,
    product: usize,
    client: usize,
    sales: usize,
    margin_percent: usize,
    margin_value: usize,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Result<Self, LoadError> {
        let find = |label: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == label)
                .ok_or(LoadError::MissingColumn(label))
        };
        Ok(Self {
            year: find(COL_YEAR)?,
            month: find(COL_MONTH)?,
            channel: find(COL_CHANNEL)?,
            product: find(COL_PRODUCT)?,
            client: find(COL_CLIENT)?,
            sales: find(COL_SALES)?,
            margin_percent: find(COL_MARGIN_PERCENT)?,
            margin_value: find(COL_MARGIN_VALUE)?,
        })
    }
}

fn read_workbook(path: &Path) -> Result<Vec<Row>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoWorksheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or(LoadError::Empty)?
        .iter()
        .map(cell_text)
        .collect();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut failed_cells = 0usize;
    for record in rows_iter {
        let cell = |idx: usize| record.get(idx);
        let row = Row {
            year: cell_i64(cell(columns.year), &mut failed_cells).map(|v| v as i32),
            month: cell_u32(cell(columns.month), &mut failed_cells),
            channel: cell_string(cell(columns.channel)),
            product: cell_string(cell(columns.product)),
            client: cell_string(cell(columns.client)),
            sales: cell_f64(cell(columns.sales), &mut failed_cells),
            margin_percent: cell_f64(cell(columns.margin_percent), &mut failed_cells),
            margin_value: cell_f64(cell(columns.margin_value), &mut failed_cells),
            year_month: None,
        }
        .with_year_month();
        if !is_blank(&row) {
            rows.push(row);
        }
    }

    log_coercion_failures(failed_cells);
    Ok(rows)
}

fn read_csv(path: &Path) -> Result<Vec<Row>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut failed_cells = 0usize;
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();
        let row = Row {
            year: text_i64(field(columns.year), &mut failed_cells).map(|v| v as i32),
            month: text_u32(field(columns.month), &mut failed_cells),
            channel: text_string(field(columns.channel)),
            product: text_string(field(columns.product)),
            client: text_string(field(columns.client)),
            sales: text_f64(field(columns.sales), &mut failed_cells),
            margin_percent: text_f64(field(columns.margin_percent), &mut failed_cells),
            margin_value: text_f64(field(columns.margin_value), &mut failed_cells),
            year_month: None,
        }
        .with_year_month();
        if !is_blank(&row) {
            rows.push(row);
        }
    }

    log_coercion_failures(failed_cells);
    Ok(rows)
}

/// Coercion failures are counted and reported once below the default log
/// level, never surfaced to the user.
fn log_coercion_failures(failed_cells: usize) {
    if failed_cells > 0 {
        tracing::debug!("{} cells failed numeric coercion, kept as missing", failed_cells);
    }
}

fn is_blank(row: &Row) -> bool {
    row.year.is_none()
        && row.month.is_none()
        && row.channel.is_none()
        && row.product.is_none()
        && row.client.is_none()
        && row.sales.is_none()
        && row.margin_percent.is_none()
        && row.margin_value.is_none()
}

// --- workbook cells --------------------------------------------------------

fn cell_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_f64(data: Option<&Data>, failed: &mut usize) -> Option<f64> {
    match data? {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => text_f64(s, failed),
        Data::Empty => None,
        _ => {
            *failed += 1;
            None
        }
    }
}

fn cell_i64(data: Option<&Data>, failed: &mut usize) -> Option<i64> {
    match data? {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => text_i64(s, failed),
        Data::Empty => None,
        _ => {
            *failed += 1;
            None
        }
    }
}

fn cell_u32(data: Option<&Data>, failed: &mut usize) -> Option<u32> {
    cell_i64(data, failed).and_then(|v| u32::try_from(v).ok())
}

fn cell_string(data: Option<&Data>) -> Option<String> {
    let text = cell_text(data?);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// --- csv fields ------------------------------------------------------------

fn text_f64(raw: &str, failed: &mut usize) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }
    let value = coerce_f64(raw);
    if value.is_none() {
        *failed += 1;
    }
    value
}

fn text_i64(raw: &str, failed: &mut usize) -> Option<i64> {
    if raw.trim().is_empty() {
        return None;
    }
    let value = coerce_i64(raw);
    if value.is_none() {
        *failed += 1;
    }
    value
}

fn text_u32(raw: &str, failed: &mut usize) -> Option<u32> {
    if raw.trim().is_empty() {
        return None;
    }
    let value = coerce_u32(raw);
    if value.is_none() {
        *failed += 1;
    }
    value
}

fn text_string(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        path
    }

    #[test]
    fn test_load_csv_coerces_and_sorts() {
        let path = write_csv(
            "dataset_loader_basic.csv",
            "Year,Month,Channel,Product,Client,Sales,MarginPercent,MarginValue\n\
             2023,2,Retail,Widget,C2,50,0.2,10\n\
             2023,1,Retail,Widget,C1,100,0.3,30\n\
             oops,1,Online,Widget,C3,25,0.1,2.5\n",
        );
        let table = load_table(&path).expect("load");
        assert_eq!(table.len(), 3);
        // Sorted by (Year, Month); unparseable year sorts last as missing
        assert_eq!(table.rows[0].client.as_deref(), Some("C1"));
        assert_eq!(table.rows[1].client.as_deref(), Some("C2"));
        assert_eq!(table.rows[2].year, None);
        assert_eq!(table.rows[2].sales, Some(25.0));
        assert_eq!(
            table.rows[0].year_month,
            chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        // Missing year means a missing time key, silently
        assert_eq!(table.rows[2].year_month, None);
    }

    #[test]
    fn test_load_csv_missing_column() {
        let path = write_csv(
            "dataset_loader_missing_col.csv",
            "Year,Month,Channel,Product,Client,Sales,MarginPercent\n\
             2023,1,Retail,Widget,C1,100,0.3\n",
        );
        match load_table(&path) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "MarginValue"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::path::Path::new("definitely/not/here.xlsx");
        assert!(matches!(
            load_table(path),
            Err(LoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let path = write_csv(
            "dataset_loader_blank.csv",
            "Year,Month,Channel,Product,Client,Sales,MarginPercent,MarginValue\n\
             2023,1,Retail,Widget,C1,100,0.3,30\n\
             ,,,,,,,\n",
        );
        let table = load_table(&path).expect("load");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invalid_month_keeps_row_without_time_key() {
        let path = write_csv(
            "dataset_loader_month13.csv",
            "Year,Month,Channel,Product,Client,Sales,MarginPercent,MarginValue\n\
             2023,13,Retail,Widget,C1,100,0.3,30\n",
        );
        let table = load_table(&path).expect("load");
        assert_eq!(table.rows[0].month, Some(13));
        assert_eq!(table.rows[0].year_month, None);
    }
}
