//! Monthly KPI Report
//!
//! Rolls weekly reports up into calendar months. Each weekly row is assigned
//! to exactly one month, so no week is dropped or counted twice.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{HseError, HseResult};
use crate::models::report::normalize_name;
use crate::models::{KpiMetrics, MonthKey, ReportId, WeekIdentifier, WeeklyReport};

/// One project's totals for one month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRow {
    /// Owning month
    pub month: MonthKey,
    /// Project name
    pub project: String,
    /// Fiscal weeks that contributed, in order
    pub weeks: Vec<WeekIdentifier>,
    /// Number of weekly reports summed
    pub report_count: usize,
    /// Summed indicators
    pub totals: KpiMetrics,
    /// Lost-time injury frequency rate
    pub ltifr: f64,
    /// Total recordable incident rate
    pub trir: f64,
}

/// A weekly report left out of the rollup
#[derive(Debug, Clone, Serialize)]
pub struct SkippedReport {
    pub id: ReportId,
    pub reason: String,
}

/// Monthly Report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Rows ordered by month, then project
    pub rows: Vec<MonthlyRow>,
    /// Totals across all rows
    pub totals: KpiMetrics,
    /// Reports whose month could not be resolved
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedReport>,
}

impl MonthlyReport {
    /// Generate the monthly rollup of a set of weekly reports
    pub fn generate(reports: &[WeeklyReport]) -> Self {
        let mut groups: BTreeMap<(MonthKey, String), MonthlyRow> = BTreeMap::new();
        let mut skipped = Vec::new();

        for report in reports {
            let (month, week) = match report.month_key().and_then(|m| {
                report.week_identifier().map(|w| (m, w))
            }) {
                Ok(resolved) => resolved,
                Err(e) => {
                    skipped.push(SkippedReport {
                        id: report.id,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let row = groups
                .entry((month, normalize_name(&report.project)))
                .or_insert_with(|| MonthlyRow {
                    month,
                    project: report.project.trim().to_string(),
                    weeks: Vec::new(),
                    report_count: 0,
                    totals: KpiMetrics::default(),
                    ltifr: 0.0,
                    trir: 0.0,
                });

            if !row.weeks.contains(&week) {
                row.weeks.push(week);
            }
            row.report_count += 1;
            row.totals += report.metrics;
        }

        let mut rows: Vec<MonthlyRow> = groups.into_values().collect();
        for row in &mut rows {
            row.weeks.sort();
            row.ltifr = row.totals.ltifr();
            row.trir = row.totals.trir();
        }

        let totals: KpiMetrics = rows.iter().map(|r| &r.totals).sum();

        Self {
            rows,
            totals,
            skipped,
        }
    }

    /// Months covered by the report, in order
    pub fn months(&self) -> Vec<MonthKey> {
        let mut months: Vec<_> = self.rows.iter().map(|r| r.month).collect();
        months.dedup();
        months
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly HSE KPI Report\n");
        output.push_str(&"=".repeat(96));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No weekly reports found.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:<24} {:<14} {:>10} {:>5} {:>5} {:>5} {:>5} {:>8} {:>8}\n",
            "Month", "Project", "Weeks", "Man-hours", "LTI", "REC", "FAC", "NM", "LTIFR", "TRIR"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<8} {:<24} {:<14} {:>10.1} {:>5} {:>5} {:>5} {:>5} {:>8.2} {:>8.2}\n",
                row.month.to_string(),
                truncate(&row.project, 24),
                week_span(&row.weeks),
                row.totals.man_hours,
                row.totals.lost_time_injuries,
                row.totals.recordable_injuries,
                row.totals.first_aid_cases,
                row.totals.near_misses,
                row.ltifr,
                row.trir
            ));
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:<24} {:<14} {:>10.1} {:>5} {:>5} {:>5} {:>5} {:>8.2} {:>8.2}\n",
            "TOTAL",
            "",
            "",
            self.totals.man_hours,
            self.totals.lost_time_injuries,
            self.totals.recordable_injuries,
            self.totals.first_aid_cases,
            self.totals.near_misses,
            self.totals.ltifr(),
            self.totals.trir()
        ));

        if !self.skipped.is_empty() {
            output.push_str(&format!("\nSkipped {} report(s):\n", self.skipped.len()));
            for skipped in &self.skipped {
                output.push_str(&format!("  {}: {}\n", skipped.id, skipped.reason));
            }
        }

        output
    }

    /// Export the report rows as CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> HseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record([
                "Month",
                "Project",
                "Weeks",
                "Reports",
                "Man Hours",
                "Lost Time Injuries",
                "Recordable Injuries",
                "First Aid Cases",
                "Near Misses",
                "Inspections",
                "Trainings",
                "LTIFR",
                "TRIR",
            ])
            .map_err(|e| HseError::Export(e.to_string()))?;

        for row in &self.rows {
            let weeks = row
                .weeks
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            csv_writer
                .write_record([
                    row.month.to_string(),
                    row.project.clone(),
                    weeks,
                    row.report_count.to_string(),
                    format!("{:.1}", row.totals.man_hours),
                    row.totals.lost_time_injuries.to_string(),
                    row.totals.recordable_injuries.to_string(),
                    row.totals.first_aid_cases.to_string(),
                    row.totals.near_misses.to_string(),
                    row.totals.inspections.to_string(),
                    row.totals.trainings.to_string(),
                    format!("{:.2}", row.ltifr),
                    format!("{:.2}", row.trir),
                ])
                .map_err(|e| HseError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| HseError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Compact rendering of a week list, e.g. "W02-W05 2026"
fn week_span(weeks: &[WeekIdentifier]) -> String {
    match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) if first == last => {
            format!("W{:02} {}", first.week(), first.year())
        }
        (Some(first), Some(last)) if first.year() == last.year() => {
            format!("W{:02}-W{:02} {}", first.week(), last.week(), last.year())
        }
        (Some(first), Some(last)) => format!("{}..{}", first, last),
        _ => String::new(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('~');
        out
    }
}
