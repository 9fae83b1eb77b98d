//! Report-mode entry point: profiles the full dataset and writes a static
//! HTML summary, then opens it for viewing.

use std::path::Path;

use backend::domain::dataset::load_table;
use backend::shared::config;
use backend::usecases::u900_profile_report::service;

fn main() -> anyhow::Result<()> {
    backend::system::tracing::initialize()?;

    let config = config::load_config()?;
    let dataset_path = config::resolve_path(&config.dataset.path);
    let table = load_table(&dataset_path)?;

    let response = service::generate(&config, &table)?;
    println!("Profile report created at: {}", response.path);
    service::open_in_browser(Path::new(&response.path));

    Ok(())
}
