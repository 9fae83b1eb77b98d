use chrono::NaiveDate;

/// One transactional sales record.
///
/// Numeric fields that failed coercion at load time are `None`. Aggregation
/// treats missing values as exclusions, never as zeros.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub channel: Option<String>,
    pub product: Option<String>,
    pub client: Option<String>,
    pub sales: Option<f64>,
    /// Margin on a 0..1 scale
    pub margin_percent: Option<f64>,
    pub margin_value: Option<f64>,
    /// First day of (year, month); `None` when either part is missing or
    /// the month is outside 1..=12
    pub year_month: Option<NaiveDate>,
}

impl Row {
    /// Derives the monthly time key from the already-coerced year and month.
    pub fn with_year_month(mut self) -> Self {
        self.year_month = year_month(self.year, self.month);
        self
    }
}

/// Monthly bucket key. `NaiveDate::from_ymd_opt` rejects months outside
/// 1..=12, which is exactly the invalid-combination rule we want.
pub fn year_month(year: Option<i32>, month: Option<u32>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year?, month?, 1)
}

/// The loaded dataset: rows sorted by (Year, Month) ascending, read-only
/// after load.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Sorts rows by (Year, Month) ascending, missing keys last.
    pub fn new(mut rows: Vec<Row>) -> Self {
        rows.sort_by_key(|r| {
            (
                r.year.is_none(),
                r.year,
                r.month.is_none(),
                r.month,
            )
        });
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lenient float coercion: trims, accepts decimal commas, `None` on anything
/// that does not parse to a finite number.
pub fn coerce_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Lenient integer coercion: also accepts floats with a zero fractional
/// part ("2023.0" reads as 2023, the way spreadsheet cells round-trip).
pub fn coerce_i64(raw: &str) -> Option<i64> {
    let value = coerce_f64(raw)?;
    if value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Integer coercion narrowed to a non-negative month/year-sized value.
pub fn coerce_u32(raw: &str) -> Option<u32> {
    coerce_i64(raw).and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_f64() {
        assert_eq!(coerce_f64("100"), Some(100.0));
        assert_eq!(coerce_f64(" 12.5 "), Some(12.5));
        assert_eq!(coerce_f64("12,5"), Some(12.5));
        assert_eq!(coerce_f64(""), None);
        assert_eq!(coerce_f64("abc"), None);
        assert_eq!(coerce_f64("NaN"), None);
        assert_eq!(coerce_f64("inf"), None);
    }

    #[test]
    fn test_coerce_i64() {
        assert_eq!(coerce_i64("2023"), Some(2023));
        assert_eq!(coerce_i64("2023.0"), Some(2023));
        assert_eq!(coerce_i64("2023.5"), None);
        assert_eq!(coerce_i64("-3"), Some(-3));
        assert_eq!(coerce_i64("x"), None);
    }

    #[test]
    fn test_coerce_u32_rejects_negative() {
        assert_eq!(coerce_u32("7"), Some(7));
        assert_eq!(coerce_u32("-7"), None);
    }

    #[test]
    fn test_year_month_derivation() {
        assert_eq!(
            year_month(Some(2023), Some(1)),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        // Out-of-range month yields a missing key, not an error
        assert_eq!(year_month(Some(2023), Some(13)), None);
        assert_eq!(year_month(Some(2023), Some(0)), None);
        assert_eq!(year_month(None, Some(5)), None);
        assert_eq!(year_month(Some(2023), None), None);
    }

    #[test]
    fn test_table_sorts_by_year_month_missing_last() {
        let rows = vec![
            Row {
                year: Some(2024),
                month: Some(2),
                ..Default::default()
            },
            Row {
                year: None,
                month: Some(1),
                ..Default::default()
            },
            Row {
                year: Some(2023),
                month: Some(12),
                ..Default::default()
            },
            Row {
                year: Some(2024),
                month: Some(1),
                ..Default::default()
            },
        ];
        let table = Table::new(rows);
        let keys: Vec<(Option<i32>, Option<u32>)> =
            table.rows.iter().map(|r| (r.year, r.month)).collect();
        assert_eq!(
            keys,
            vec![
                (Some(2023), Some(12)),
                (Some(2024), Some(1)),
                (Some(2024), Some(2)),
                (None, Some(1)),
            ]
        );
    }
}
