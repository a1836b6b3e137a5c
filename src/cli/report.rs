//! CLI commands for weekly KPI reports
//!
//! Provides commands for submitting, listing, importing and exporting weekly
//! reports and for generating the monthly rollup.

use clap::{Args, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::{format_report_details, format_report_list};
use crate::error::{HseError, HseResult};
use crate::export::{export_monthly, export_weekly, ExportFormat};
use crate::models::{KpiMetrics, MonthKey, WeekIdentifier, WeeklyReport};
use crate::services::{ImportService, ReportFilter, ReportService};
use crate::storage::Storage;

use super::{create_output, parse_date, parse_month, today};

/// Filter options shared by the listing commands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only this project
    #[arg(short, long)]
    pub project: Option<String>,

    /// Only this zone
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Only this fiscal year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// First month to include (YYYY-MM)
    #[arg(long)]
    pub from: Option<String>,

    /// Last month to include (YYYY-MM)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> HseResult<ReportFilter> {
        Ok(ReportFilter {
            project: self.project,
            zone: self.zone,
            year: self.year,
            from_month: parse_month(self.from.as_deref())?,
            to_month: parse_month(self.to.as_deref())?,
        })
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Submit a weekly report
    Add {
        /// Week number (1-52)
        week: u32,

        /// Fiscal year
        year: i32,

        /// Project name (defaults to the configured project)
        #[arg(short, long)]
        project: Option<String>,

        /// Zone or site within the project
        #[arg(short, long, default_value = "")]
        zone: String,

        /// Explicit week start date (YYYY-MM-DD), requires --end
        #[arg(long)]
        start: Option<String>,

        /// Explicit week end date (YYYY-MM-DD), requires --start
        #[arg(long)]
        end: Option<String>,

        /// Man-hours worked
        #[arg(long, default_value_t = 0.0)]
        man_hours: f64,

        /// Lost-time injuries
        #[arg(long, default_value_t = 0)]
        lti: u32,

        /// Recordable injuries
        #[arg(long, default_value_t = 0)]
        recordable: u32,

        /// First-aid cases
        #[arg(long, default_value_t = 0)]
        first_aid: u32,

        /// Near misses
        #[arg(long, default_value_t = 0)]
        near_misses: u32,

        /// Inspections carried out
        #[arg(long, default_value_t = 0)]
        inspections: u32,

        /// Training sessions held
        #[arg(long, default_value_t = 0)]
        trainings: u32,
    },

    /// List weekly reports
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a weekly report
    Show {
        /// Report ID (full UUID or short form like rpt-1a2b3c4d)
        id: String,
    },

    /// Delete a weekly report
    #[command(alias = "rm")]
    Delete {
        /// Report ID (full UUID or short form like rpt-1a2b3c4d)
        id: String,
    },

    /// Import weekly reports from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Export weekly reports to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format (defaults to the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Generate the monthly rollup
    Monthly {
        #[command(flatten)]
        filter: FilterArgs,

        /// Export to file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (defaults to the file extension)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Only the calendar month before the current one
        #[arg(long, conflicts_with_all = ["from", "to"])]
        last_month: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> HseResult<()> {
    let service = ReportService::new(storage);

    match cmd {
        ReportCommands::Add {
            week,
            year,
            project,
            zone,
            start,
            end,
            man_hours,
            lti,
            recordable,
            first_aid,
            near_misses,
            inspections,
            trainings,
        } => {
            let project = project
                .or_else(|| settings.default_project.clone())
                .ok_or_else(|| {
                    HseError::Validation(
                        "No project given. Use --project or set default_project in config.json"
                            .into(),
                    )
                })?;
            let metrics = KpiMetrics {
                man_hours,
                lost_time_injuries: lti,
                recordable_injuries: recordable,
                first_aid_cases: first_aid,
                near_misses,
                inspections,
                trainings,
            };

            let mut report =
                WeeklyReport::new(project, zone, WeekIdentifier::new(week, year)?, metrics);
            report.week_start = start.as_deref().map(parse_date).transpose()?;
            report.week_end = end.as_deref().map(parse_date).transpose()?;

            let report = service.submit(report)?;
            println!("Submitted report {}", report.id);
            print!("{}", format_report_details(&report, &settings.date_format));
        }

        ReportCommands::List { filter } => {
            let reports = service.list(&filter.into_filter()?)?;
            println!("{}", format_report_list(&reports));
        }

        ReportCommands::Show { id } => {
            let report = service
                .find(&id)?
                .ok_or_else(|| HseError::report_not_found(&id))?;
            print!("{}", format_report_details(&report, &settings.date_format));
        }

        ReportCommands::Delete { id } => {
            let report = service.delete(&id)?;
            println!(
                "Deleted report {} ({} week {} of {})",
                report.id, report.project, report.week, report.year
            );
        }

        ReportCommands::Import { file } => {
            let result = ImportService::new(storage).import_file(&file)?;

            println!("Imported {} report(s)", result.imported);
            if result.duplicates_skipped > 0 {
                println!("Skipped {} duplicate(s)", result.duplicates_skipped);
            }
            if result.error_count() > 0 {
                println!("{} row(s) had errors:", result.error_count());
                for (line, msg) in &result.errors {
                    println!("  line {}: {}", line, msg);
                }
            }
        }

        ReportCommands::Export {
            output,
            format,
            filter,
        } => {
            let reports = service.list(&filter.into_filter()?)?;
            let format = resolve_format(format, &output, settings);

            let mut writer = create_output(&output)?;
            export_weekly(&reports, format, &mut writer)?;
            writer.flush()?;

            println!(
                "Exported {} report(s) to: {}",
                reports.len(),
                output.display()
            );
        }

        ReportCommands::Monthly {
            filter,
            output,
            format,
            last_month,
        } => {
            let mut filter = filter.into_filter()?;
            if last_month {
                let month = MonthKey::of(today()).prev();
                filter.from_month = Some(month);
                filter.to_month = Some(month);
            }
            let report = service.monthly_rollup(&filter)?;

            if let Some(path) = output {
                let format = resolve_format(format, &path, settings);

                let mut writer = create_output(&path)?;
                export_monthly(&report, format, &mut writer)?;
                writer.flush()?;

                println!("Monthly report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

/// Pick the export format: explicit flag, then file extension, then settings
fn resolve_format(format: Option<ExportFormat>, path: &Path, settings: &Settings) -> ExportFormat {
    format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or(settings.default_export_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HsePaths;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_format() {
        let settings = Settings::default();
        assert_eq!(
            resolve_format(Some(ExportFormat::Yaml), Path::new("out.json"), &settings),
            ExportFormat::Yaml
        );
        assert_eq!(
            resolve_format(None, Path::new("out.json"), &settings),
            ExportFormat::Json
        );
        assert_eq!(
            resolve_format(None, Path::new("out.txt"), &settings),
            settings.default_export_format
        );
    }

    #[test]
    fn test_add_uses_default_project() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let add = |settings: &Settings| {
            handle_report_command(
                &storage,
                settings,
                ReportCommands::Add {
                    week: 2,
                    year: 2026,
                    project: None,
                    zone: String::new(),
                    start: None,
                    end: None,
                    man_hours: 10.0,
                    lti: 0,
                    recordable: 0,
                    first_aid: 0,
                    near_misses: 0,
                    inspections: 0,
                    trainings: 0,
                },
            )
        };

        let err = add(&Settings::default()).unwrap_err();
        assert!(matches!(err, HseError::Validation(_)));

        let settings = Settings {
            default_project: Some("Pipeline".into()),
            ..Settings::default()
        };
        add(&settings).unwrap();

        let stored = storage.reports.get_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].project, "Pipeline");
    }
}
