//! CSV import of weekly KPI reports
//!
//! Expects a header row naming the columns. `project`, `week` and `year` are
//! required; `zone`, `week_start`, `week_end` and every metric column may be
//! omitted or left empty.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{HseError, HseResult};
use crate::models::{KpiMetrics, WeekIdentifier, WeeklyReport};
use crate::services::ReportService;
use crate::storage::Storage;

/// One CSV record as read from the file
#[derive(Debug, Clone, Deserialize)]
struct ImportRecord {
    project: String,
    #[serde(default)]
    zone: Option<String>,
    week: u32,
    year: i32,
    #[serde(default)]
    week_start: Option<NaiveDate>,
    #[serde(default)]
    week_end: Option<NaiveDate>,
    #[serde(default)]
    man_hours: Option<f64>,
    #[serde(default)]
    lost_time_injuries: Option<u32>,
    #[serde(default)]
    recordable_injuries: Option<u32>,
    #[serde(default)]
    first_aid_cases: Option<u32>,
    #[serde(default)]
    near_misses: Option<u32>,
    #[serde(default)]
    inspections: Option<u32>,
    #[serde(default)]
    trainings: Option<u32>,
}

impl ImportRecord {
    fn into_report(self) -> HseResult<WeeklyReport> {
        let week = WeekIdentifier::new(self.week, self.year)?;
        let metrics = KpiMetrics {
            man_hours: self.man_hours.unwrap_or_default(),
            lost_time_injuries: self.lost_time_injuries.unwrap_or_default(),
            recordable_injuries: self.recordable_injuries.unwrap_or_default(),
            first_aid_cases: self.first_aid_cases.unwrap_or_default(),
            near_misses: self.near_misses.unwrap_or_default(),
            inspections: self.inspections.unwrap_or_default(),
            trainings: self.trainings.unwrap_or_default(),
        };

        let mut report = WeeklyReport::new(
            self.project.trim(),
            self.zone.as_deref().unwrap_or("").trim(),
            week,
            metrics,
        );
        report.week_start = self.week_start;
        report.week_end = self.week_end;
        Ok(report)
    }
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of reports imported
    pub imported: usize,
    /// Number of duplicates skipped
    pub duplicates_skipped: usize,
    /// Error messages by line number in the CSV file
    pub errors: BTreeMap<usize, String>,
}

impl ImportResult {
    /// Number of rows with errors
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse CSV data into weekly reports
    ///
    /// Each entry is paired with its 1-based line number (the header is line 1).
    pub fn parse<R: Read>(&self, reader: R) -> Vec<(usize, Result<WeeklyReport, String>)> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<ImportRecord>()
            .enumerate()
            .map(|(idx, result)| {
                let line = idx + 2;
                let parsed = result
                    .map_err(|e| format!("Error reading CSV record: {}", e))
                    .and_then(|record| record.into_report().map_err(|e| e.to_string()));
                (line, parsed)
            })
            .collect()
    }

    /// Import weekly reports from a reader
    ///
    /// Invalid rows and duplicates are skipped; everything else is stored.
    pub fn import_from_reader<R: Read>(&self, reader: R) -> HseResult<ImportResult> {
        let report_service = ReportService::new(self.storage);
        let mut result = ImportResult::default();

        for (line, parsed) in self.parse(reader) {
            let report = match parsed {
                Ok(report) => report,
                Err(msg) => {
                    debug!(line, %msg, "skipping invalid row");
                    result.errors.insert(line, msg);
                    continue;
                }
            };

            match report_service.check(&report) {
                Ok(()) => {
                    self.storage.reports.upsert(report)?;
                    result.imported += 1;
                }
                Err(HseError::Duplicate { .. }) => {
                    debug!(line, "skipping duplicate row");
                    result.duplicates_skipped += 1;
                }
                Err(HseError::Validation(msg)) => {
                    result.errors.insert(line, msg);
                }
                Err(e) => return Err(e),
            }
        }

        if result.imported > 0 {
            self.storage.reports.save()?;
        }

        info!(
            imported = result.imported,
            duplicates = result.duplicates_skipped,
            errors = result.error_count(),
            "CSV import finished"
        );
        Ok(result)
    }

    /// Import weekly reports from a CSV file
    pub fn import_file(&self, path: &Path) -> HseResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            HseError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(file)
    }
}
