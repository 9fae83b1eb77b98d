use std::collections::BTreeSet;

use super::table::Table;

/// Distinct selectable filter values, derived from the loaded table once at
/// startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Distinct non-missing channels, sorted
    pub channels: Vec<String>,
    /// Distinct non-missing products, sorted
    pub products: Vec<String>,
    /// Distinct non-missing years, ascending
    pub years: Vec<i32>,
}

impl FilterOptions {
    pub fn from_table(table: &Table) -> Self {
        let mut channels = BTreeSet::new();
        let mut products = BTreeSet::new();
        let mut years = BTreeSet::new();
        for row in &table.rows {
            if let Some(channel) = &row.channel {
                channels.insert(channel.clone());
            }
            if let Some(product) = &row.product {
                products.insert(product.clone());
            }
            if let Some(year) = row.year {
                years.insert(year);
            }
        }
        Self {
            channels: channels.into_iter().collect(),
            products: products.into_iter().collect(),
            years: years.into_iter().collect(),
        }
    }

    /// The year preselected on startup: the latest one observed.
    pub fn default_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::table::Row;

    fn row(year: Option<i32>, channel: Option<&str>, product: Option<&str>) -> Row {
        Row {
            year,
            channel: channel.map(str::to_string),
            product: product.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_options_are_distinct_and_sorted() {
        let table = Table::new(vec![
            row(Some(2024), Some("Retail"), Some("Widget")),
            row(Some(2022), Some("Online"), Some("Widget")),
            row(Some(2024), Some("Retail"), Some("Gadget")),
            row(None, None, None),
        ]);
        let options = FilterOptions::from_table(&table);
        assert_eq!(options.channels, vec!["Online", "Retail"]);
        assert_eq!(options.products, vec!["Gadget", "Widget"]);
        assert_eq!(options.years, vec![2022, 2024]);
        assert_eq!(options.default_year(), Some(2024));
    }

    #[test]
    fn test_options_of_empty_table() {
        let options = FilterOptions::from_table(&Table::default());
        assert!(options.channels.is_empty());
        assert!(options.products.is_empty());
        assert_eq!(options.default_year(), None);
    }
}
