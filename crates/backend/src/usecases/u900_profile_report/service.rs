use std::path::Path;

use contracts::usecases::u900_profile_report::ProfileReportResponse;

use super::{html, profile};
use crate::domain::dataset::Table;
use crate::shared::config::{self, Config};

/// Profiles the full table and writes the static HTML report into the
/// configured output directory.
pub fn generate(config: &Config, table: &Table) -> anyhow::Result<ProfileReportResponse> {
    let profiles = profile::profile_table(table);
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let document = html::render(&profiles, table.len(), &generated_at);

    let out_dir = config::resolve_path(&config.report.output_dir);
    std::fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join("profile_report.html");
    std::fs::write(&out_path, document)?;

    tracing::info!("Profile report written to {}", out_path.display());

    Ok(ProfileReportResponse {
        path: out_path.display().to_string(),
        rows: table.len(),
        columns: profiles.len(),
    })
}

/// Best-effort platform opener for the written report. A failure is logged
/// and does not affect the success of the generation itself.
pub fn open_in_browser(path: &Path) {
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = std::process::Command::new("xdg-open").arg(path).spawn();

    if let Err(e) = spawned {
        tracing::warn!("Could not open {} in a browser: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Row;
    use crate::shared::config::Config;

    #[test]
    fn test_generate_writes_report_file() {
        let out_dir = std::env::temp_dir().join("profile_report_test");
        let config: Config = toml::from_str(&format!(
            r#"
[dataset]
path = "unused.xlsx"

[server]
port = 3000

[report]
output_dir = "{}"
"#,
            out_dir.display()
        ))
        .expect("config");

        let table = Table::new(vec![Row {
            year: Some(2023),
            month: Some(1),
            channel: Some("Retail".into()),
            sales: Some(10.0),
            ..Default::default()
        }]);

        let response = generate(&config, &table).expect("generate");
        assert_eq!(response.rows, 1);
        assert_eq!(response.columns, 8);
        let written = std::fs::read_to_string(&response.path).expect("read back");
        assert!(written.contains("Dataset Profile Report"));
    }
}
