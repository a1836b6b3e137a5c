//! hse-kpi - weekly HSE indicators on a 52-week fiscal calendar
//!
//! This library provides the core of the hse-kpi tracker: a fiscal calendar
//! of 52 Saturday-to-Friday weeks per year, the rule that assigns each week
//! to a single calendar month, and the storage, services and reports that
//! roll weekly KPI submissions up into monthly figures.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calendar`: Fiscal week calendar and week-to-month mapping (pure, no I/O)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (weeks, months, weekly reports, metrics)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (submission, CSV import)
//! - `reports`: Monthly rollup report
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `hse-kpi` binary
//!
//! # Example
//!
//! ```rust
//! use hse::calendar::{week_dates, week_to_month_key};
//!
//! let range = week_dates(6, 2026)?;
//! assert_eq!(range.start().to_string(), "2026-01-31");
//! assert_eq!(week_to_month_key(range.start(), range.end()).to_string(), "2026-02");
//! # Ok::<(), hse::HseError>(())
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HseError, HseResult};
