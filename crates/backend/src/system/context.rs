use crate::domain::dataset::{load_table, FilterOptions, Table};
use crate::shared::config::{self, Config};

/// Process-wide immutable state: constructed once at startup, read-only
/// thereafter, shared without locking.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub table: Table,
    pub options: FilterOptions,
}

impl AppContext {
    /// Loads the dataset and derives the filter options. A load failure is
    /// fatal; the caller aborts startup.
    pub fn initialize(config: Config) -> anyhow::Result<Self> {
        let dataset_path = config::resolve_path(&config.dataset.path);
        let table = load_table(&dataset_path)?;
        let options = FilterOptions::from_table(&table);

        tracing::info!(
            "Dataset ready: {} rows, {} channels, {} products, years {:?}",
            table.len(),
            options.channels.len(),
            options.products.len(),
            options.years
        );

        Ok(Self {
            config,
            table,
            options,
        })
    }
}
