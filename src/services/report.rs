//! Weekly report service
//!
//! Provides business logic for submitting, listing and deleting weekly KPI
//! reports and for building monthly rollups out of them.

use tracing::{info, warn};

use crate::error::{HseError, HseResult};
use crate::models::report::normalize_name;
use crate::models::{MonthKey, ReportId, WeeklyReport};
use crate::reports::MonthlyReport;
use crate::storage::Storage;

/// Criteria for selecting weekly reports
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Project name (case-insensitive exact match)
    pub project: Option<String>,
    /// Zone name (case-insensitive exact match)
    pub zone: Option<String>,
    /// Fiscal year
    pub year: Option<i32>,
    /// First month to include (by owning month)
    pub from_month: Option<MonthKey>,
    /// Last month to include (by owning month)
    pub to_month: Option<MonthKey>,
}

impl ReportFilter {
    /// Check if a report matches all criteria
    ///
    /// A report whose owning month cannot be resolved never matches a month bound.
    pub fn matches(&self, report: &WeeklyReport) -> bool {
        if let Some(project) = &self.project {
            if normalize_name(&report.project) != normalize_name(project) {
                return false;
            }
        }

        if let Some(zone) = &self.zone {
            if normalize_name(&report.zone) != normalize_name(zone) {
                return false;
            }
        }

        if let Some(year) = self.year {
            if report.year != year {
                return false;
            }
        }

        if self.from_month.is_some() || self.to_month.is_some() {
            let month = match report.month_key() {
                Ok(month) => month,
                Err(_) => return false,
            };
            if self.from_month.is_some_and(|from| month < from) {
                return false;
            }
            if self.to_month.is_some_and(|to| month > to) {
                return false;
            }
        }

        true
    }
}

/// Service for weekly report management
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Submit a new weekly report
    ///
    /// Rejects invalid reports and a second report for the same project,
    /// zone and fiscal week.
    pub fn submit(&self, report: WeeklyReport) -> HseResult<WeeklyReport> {
        self.check(&report)?;

        self.storage.reports.upsert(report.clone())?;
        self.storage.reports.save()?;

        info!(
            id = %report.id,
            project = %report.project,
            week = report.week,
            year = report.year,
            "weekly report submitted"
        );
        Ok(report)
    }

    /// Validate a report and check it isn't a duplicate, without storing it
    pub(crate) fn check(&self, report: &WeeklyReport) -> HseResult<()> {
        report.validate().map_err(HseError::Validation)?;

        if let Some(existing) = self.storage.reports.find_duplicate(report)? {
            return Err(HseError::Duplicate {
                entity_type: "Weekly report",
                identifier: format!(
                    "{} / {} week {} of {} ({})",
                    existing.project, existing.zone, existing.week, existing.year, existing.id
                ),
            });
        }

        Ok(())
    }

    /// List reports matching a filter
    pub fn list(&self, filter: &ReportFilter) -> HseResult<Vec<WeeklyReport>> {
        let reports = self.storage.reports.get_all()?;
        Ok(reports.into_iter().filter(|r| filter.matches(r)).collect())
    }

    /// Find a report by full UUID or by its short display form (e.g. "rpt-1a2b3c4d")
    pub fn find(&self, identifier: &str) -> HseResult<Option<WeeklyReport>> {
        if let Ok(id) = ReportId::parse(identifier) {
            return self.storage.reports.get(id);
        }

        let matches: Vec<_> = self
            .storage
            .reports
            .get_all()?
            .into_iter()
            .filter(|r| r.id.matches_short(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(HseError::Validation(format!(
                "'{}' matches {} reports; use a longer ID",
                identifier, n
            ))),
        }
    }

    /// Delete a report
    pub fn delete(&self, identifier: &str) -> HseResult<WeeklyReport> {
        let report = self
            .find(identifier)?
            .ok_or_else(|| HseError::report_not_found(identifier))?;

        self.storage.reports.delete(report.id)?;
        self.storage.reports.save()?;

        info!(id = %report.id, "weekly report deleted");
        Ok(report)
    }

    /// Build the monthly rollup of all reports matching a filter
    pub fn monthly_rollup(&self, filter: &ReportFilter) -> HseResult<MonthlyReport> {
        let reports = self.storage.reports.get_all()?;
        let selected: Vec<_> = reports.into_iter().filter(|r| filter.matches(r)).collect();

        let report = MonthlyReport::generate(&selected);
        if !report.skipped.is_empty() {
            warn!(
                count = report.skipped.len(),
                "weekly reports skipped from monthly rollup"
            );
        }
        Ok(report)
    }
}
