//! Storage layer for the HSE KPI tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod reports;

pub use file_io::DataFile;
pub use reports::WeeklyReportRepository;

use crate::config::paths::HsePaths;
use crate::error::HseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: HsePaths,
    pub reports: WeeklyReportRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: HsePaths) -> Result<Self, HseError> {
        paths.ensure_directories()?;

        Ok(Self {
            reports: WeeklyReportRepository::new(paths.weekly_reports_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &HsePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), HseError> {
        self.reports.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), HseError> {
        self.reports.save()?;
        Ok(())
    }
}
