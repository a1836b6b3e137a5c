//! Export module for the HSE KPI tracker
//!
//! Provides report export in multiple formats:
//! - CSV: Spreadsheet-compatible rows (weekly rows re-import cleanly)
//! - JSON: Machine-readable export with schema versioning
//! - YAML: Human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_weekly_csv;
pub use self::json::{export_monthly_json, export_weekly_json, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_monthly_yaml, export_weekly_yaml};

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HseResult;
use crate::models::WeeklyReport;
use crate::reports::MonthlyReport;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Some(Self::Csv),
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Write a monthly report in the requested format
pub fn export_monthly<W: Write>(
    report: &MonthlyReport,
    format: ExportFormat,
    writer: &mut W,
) -> HseResult<()> {
    match format {
        ExportFormat::Csv => report.export_csv(writer),
        ExportFormat::Json => export_monthly_json(report, writer),
        ExportFormat::Yaml => export_monthly_yaml(report, writer),
    }
}

/// Write stored weekly reports in the requested format
pub fn export_weekly<W: Write>(
    reports: &[WeeklyReport],
    format: ExportFormat,
    writer: &mut W,
) -> HseResult<()> {
    match format {
        ExportFormat::Csv => export_weekly_csv(reports, writer),
        ExportFormat::Json => export_weekly_json(reports, writer),
        ExportFormat::Yaml => export_weekly_yaml(reports, writer),
    }
}
