//! YAML Export functionality
//!
//! Exports reports to YAML for human-readable sharing.

use serde::Serialize;
use std::io::Write;

use crate::error::{HseError, HseResult};
use crate::export::json::ExportEnvelope;
use crate::models::WeeklyReport;
use crate::reports::MonthlyReport;

/// Export a monthly rollup to YAML
pub fn export_monthly_yaml<W: Write>(report: &MonthlyReport, writer: &mut W) -> HseResult<()> {
    write_yaml("Monthly HSE KPI Report", report, writer)
}

/// Export weekly reports to YAML
pub fn export_weekly_yaml<W: Write>(reports: &[WeeklyReport], writer: &mut W) -> HseResult<()> {
    write_yaml("Weekly HSE KPI Reports", &reports.to_vec(), writer)
}

fn write_yaml<T: Serialize, W: Write>(title: &str, data: &T, writer: &mut W) -> HseResult<()> {
    let export = ExportEnvelope::new(data);

    writeln!(writer, "# {}", title).map_err(|e| HseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| HseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| HseError::Export(e.to_string()))?;

    Ok(())
}
