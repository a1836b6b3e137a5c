//! Display formatting for terminal output
//!
//! Provides utilities for formatting fiscal weeks and weekly reports
//! as terminal tables and detail views.

pub mod report;
pub mod week;

pub use report::{format_report_details, format_report_list};
pub use week::{format_week_details, format_week_list};
