//! Reports module for the HSE KPI tracker
//!
//! Provides the monthly rollup built from weekly KPI reports.

pub mod monthly;

pub use monthly::{MonthlyReport, MonthlyRow, SkippedReport};
