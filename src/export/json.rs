//! JSON Export functionality
//!
//! Exports weekly reports and monthly rollups to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{HseError, HseResult};
use crate::models::WeeklyReport;
use crate::reports::MonthlyReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Envelope written around every JSON/YAML export
#[derive(Debug, Clone, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Exported payload
    pub data: &'a T,
}

impl<'a, T: Serialize> ExportEnvelope<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            data,
        }
    }
}

/// Export a monthly rollup as pretty-printed JSON
pub fn export_monthly_json<W: Write>(report: &MonthlyReport, writer: &mut W) -> HseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ExportEnvelope::new(report))
        .map_err(|e| HseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HseError::Export(e.to_string()))?;
    Ok(())
}

/// Export weekly reports as pretty-printed JSON
pub fn export_weekly_json<W: Write>(reports: &[WeeklyReport], writer: &mut W) -> HseResult<()> {
    let reports = reports.to_vec();
    serde_json::to_writer_pretty(&mut *writer, &ExportEnvelope::new(&reports))
        .map_err(|e| HseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KpiMetrics, WeekIdentifier};

    #[test]
    fn test_monthly_json_structure() {
        let weekly = vec![WeeklyReport::new(
            "Pipeline",
            "A",
            WeekIdentifier::new(2, 2026).unwrap(),
            KpiMetrics {
                man_hours: 100.0,
                ..Default::default()
            },
        )];
        let report = MonthlyReport::generate(&weekly);

        let mut buffer = Vec::new();
        export_monthly_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["data"]["rows"][0]["month"], "2026-01");
        assert_eq!(value["data"]["rows"][0]["weeks"][0], "2026-W02");
        assert_eq!(value["data"]["totals"]["man_hours"], 100.0);
    }

    #[test]
    fn test_weekly_json_round_trip() {
        let weekly = vec![WeeklyReport::new(
            "Pipeline",
            "A",
            WeekIdentifier::new(2, 2026).unwrap(),
            KpiMetrics::default(),
        )];

        let mut buffer = Vec::new();
        export_weekly_json(&weekly, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let back: Vec<WeeklyReport> = serde_json::from_value(value["data"].clone()).unwrap();
        assert_eq!(back, weekly);
    }
}
