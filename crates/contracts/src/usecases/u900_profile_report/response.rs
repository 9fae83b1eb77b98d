use serde::{Deserialize, Serialize};

/// Result of a profile-report generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReportResponse {
    /// Absolute or exe-relative path of the written HTML file
    pub path: String,
    /// Number of dataset rows profiled
    pub rows: usize,
    /// Number of profiled columns
    pub columns: usize,
}
