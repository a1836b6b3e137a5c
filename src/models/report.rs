//! Weekly HSE KPI report model
//!
//! One row per project, zone and fiscal week. Monthly reports are built by
//! assigning every weekly row to exactly one calendar month.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ReportId;
use super::kpi::KpiMetrics;
use super::month::MonthKey;
use super::week::WeekIdentifier;
use crate::calendar::{week_dates, week_to_month_key};
use crate::error::HseResult;

/// A weekly KPI submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Unique identifier
    pub id: ReportId,

    /// Project the report belongs to
    pub project: String,

    /// Site zone within the project
    #[serde(default)]
    pub zone: String,

    /// Fiscal week number (1..=52)
    pub week: u32,

    /// Fiscal year the week is counted in
    pub year: i32,

    /// Explicit first day of the reporting week, when it was stored with the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<NaiveDate>,

    /// Explicit last day of the reporting week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_end: Option<NaiveDate>,

    /// Recorded indicators
    #[serde(default)]
    pub metrics: KpiMetrics,

    /// When the report was submitted
    pub submitted_at: DateTime<Utc>,
}

impl WeeklyReport {
    /// Create a new weekly report for a fiscal week
    pub fn new(
        project: impl Into<String>,
        zone: impl Into<String>,
        week: WeekIdentifier,
        metrics: KpiMetrics,
    ) -> Self {
        Self {
            id: ReportId::new(),
            project: project.into(),
            zone: zone.into(),
            week: week.week(),
            year: week.year(),
            week_start: None,
            week_end: None,
            metrics,
            submitted_at: Utc::now(),
        }
    }

    /// Attach explicit week boundary dates
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.week_start = Some(start);
        self.week_end = Some(end);
        self
    }

    /// The fiscal week of this report
    pub fn week_identifier(&self) -> HseResult<WeekIdentifier> {
        WeekIdentifier::new(self.week, self.year)
    }

    /// Date range covered by this report
    ///
    /// Uses the stored dates when both are present, otherwise derives them
    /// from the fiscal week.
    pub fn date_range(&self) -> HseResult<(NaiveDate, NaiveDate)> {
        match (self.week_start, self.week_end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => {
                let range = week_dates(self.week, self.year)?;
                Ok((range.start(), range.end()))
            }
        }
    }

    /// Calendar month this report rolls up into
    pub fn month_key(&self) -> HseResult<MonthKey> {
        let (start, end) = self.date_range()?;
        Ok(week_to_month_key(start, end))
    }

    /// Key identifying duplicate submissions: same project, zone and week
    pub fn dedup_key(&self) -> (String, String, u32, i32) {
        (
            normalize_name(&self.project),
            normalize_name(&self.zone),
            self.week,
            self.year,
        )
    }

    /// Validate the report
    pub fn validate(&self) -> Result<(), String> {
        if self.project.trim().is_empty() {
            return Err("project name cannot be empty".to_string());
        }

        WeekIdentifier::new(self.week, self.year).map_err(|e| e.to_string())?;

        match (self.week_start, self.week_end) {
            (Some(_), None) | (None, Some(_)) => {
                return Err("week start and end dates must be given together".to_string());
            }
            _ => {}
        }

        self.metrics.validate()
    }
}

/// Canonical form of a project or zone name for matching and grouping
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}
