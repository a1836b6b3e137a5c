//! Core data models for the HSE KPI tracker
//!
//! This module contains the value types of the fiscal calendar (weeks and
//! months) and the weekly KPI report rows that are rolled up into months.

pub mod ids;
pub mod kpi;
pub mod month;
pub mod report;
pub mod week;

pub use ids::ReportId;
pub use kpi::KpiMetrics;
pub use month::MonthKey;
pub use report::WeeklyReport;
pub use week::{WeekIdentifier, WeekInfo, WeekRange, WEEKS_PER_YEAR};
