//! Service layer for the HSE KPI tracker
//!
//! Business logic sits between the CLI and storage: submission rules,
//! duplicate detection, CSV import and monthly rollups.

pub mod import;
pub mod report;

pub use import::{ImportResult, ImportService};
pub use report::{ReportFilter, ReportService};
