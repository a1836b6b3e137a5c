//! CSV Export functionality
//!
//! Writes weekly reports in the same column layout the CSV importer reads.

use std::io::Write;

use crate::error::{HseError, HseResult};
use crate::models::WeeklyReport;

/// Column header shared with the CSV importer
pub const WEEKLY_CSV_HEADER: [&str; 13] = [
    "project",
    "zone",
    "week",
    "year",
    "week_start",
    "week_end",
    "man_hours",
    "lost_time_injuries",
    "recordable_injuries",
    "first_aid_cases",
    "near_misses",
    "inspections",
    "trainings",
];

/// Export weekly reports to CSV
pub fn export_weekly_csv<W: Write>(reports: &[WeeklyReport], writer: &mut W) -> HseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(WEEKLY_CSV_HEADER)
        .map_err(|e| HseError::Export(e.to_string()))?;

    for report in reports {
        let m = &report.metrics;
        csv_writer
            .write_record([
                report.project.clone(),
                report.zone.clone(),
                report.week.to_string(),
                report.year.to_string(),
                report.week_start.map(|d| d.to_string()).unwrap_or_default(),
                report.week_end.map(|d| d.to_string()).unwrap_or_default(),
                m.man_hours.to_string(),
                m.lost_time_injuries.to_string(),
                m.recordable_injuries.to_string(),
                m.first_aid_cases.to_string(),
                m.near_misses.to_string(),
                m.inspections.to_string(),
                m.trainings.to_string(),
            ])
            .map_err(|e| HseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| HseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HsePaths;
    use crate::models::{KpiMetrics, WeekIdentifier};
    use crate::services::ImportService;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_exported_csv_reimports() {
        let reports = vec![
            WeeklyReport::new(
                "Pipeline, Phase 2",
                "North",
                WeekIdentifier::new(2, 2026).unwrap(),
                KpiMetrics {
                    man_hours: 1250.5,
                    near_misses: 2,
                    ..Default::default()
                },
            ),
            WeeklyReport::new(
                "Pipeline, Phase 2",
                "North",
                WeekIdentifier::new(6, 2026).unwrap(),
                KpiMetrics::default(),
            )
            .with_dates(
                NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2026, 2, 6).unwrap(),
            ),
        ];

        let mut buffer = Vec::new();
        export_weekly_csv(&reports, &mut buffer).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(HsePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let result = ImportService::new(&storage)
            .import_from_reader(buffer.as_slice())
            .unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.error_count(), 0);

        let imported = storage.reports.get_all().unwrap();
        assert_eq!(imported[0].project, "Pipeline, Phase 2");
        assert_eq!(imported[0].metrics.man_hours, 1250.5);
        assert_eq!(imported[1].week_start, reports[1].week_start);
    }
}
