//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calendar and service layers.

pub mod month;
pub mod report;
pub mod week;

pub use month::{handle_month_command, handle_month_key, MonthCommands};
pub use report::{handle_report_command, ReportCommands};
pub use week::{handle_week_command, WeekCommands};

use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{HseError, HseResult};
use crate::models::MonthKey;

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> HseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        HseError::InvalidArgument(format!("Invalid date: {}. Use YYYY-MM-DD", s))
    })
}

/// Parse an optional YYYY-MM month argument
pub(crate) fn parse_month(s: Option<&str>) -> HseResult<Option<MonthKey>> {
    s.map(MonthKey::parse).transpose()
}

/// Today's date from the local clock
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Create an output file wrapped in a buffered writer
pub(crate) fn create_output(path: &Path) -> HseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        HseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
