//! Path management for the HSE KPI tracker
//!
//! ## Path Resolution Order
//!
//! 1. `HSE_KPI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `hse-kpi`
//!    (e.g. `~/.config/hse-kpi` on Linux, `%APPDATA%\hse-kpi\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::HseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "HSE_KPI_DATA_DIR";

/// Manages all paths used by the HSE KPI tracker
#[derive(Debug, Clone)]
pub struct HsePaths {
    /// Base directory for all application data
    base_dir: PathBuf,
}

impl HsePaths {
    /// Create a new HsePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, HseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create HsePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to weekly_reports.json
    pub fn weekly_reports_file(&self) -> PathBuf {
        self.data_dir().join("weekly_reports.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), HseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HseError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| HseError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, HseError> {
    ProjectDirs::from("", "", "hse-kpi")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| HseError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.export_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.weekly_reports_file(),
            temp_dir.path().join("data").join("weekly_reports.json")
        );
    }
}
