//! User settings for the HSE KPI tracker
//!
//! Manages display and export preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::HsePaths;
use crate::error::HseError;
use crate::export::ExportFormat;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used in terminal output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format used by `report monthly --output` when the file extension
    /// doesn't name one
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Project used when a command doesn't name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            default_export_format: ExportFormat::default(),
            default_project: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &HsePaths) -> Result<Self, HseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| HseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| HseError::Config(format!("Failed to parse settings file: {}", e)))?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check that the settings can be used for formatting
    pub fn validate(&self) -> Result<(), HseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(HseError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HsePaths) -> Result<(), HseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
        assert!(settings.default_project.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_export_format: ExportFormat::Json,
            default_project: Some("Refinery Upgrade".into()),
            ..Default::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_export_format, ExportFormat::Json);
        assert_eq!(loaded.default_project.as_deref(), Some("Refinery Upgrade"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, HseError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HsePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, HseError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_validate_accepts_default_and_custom_formats() {
        assert!(Settings::default().validate().is_ok());

        let settings = Settings {
            date_format: "%d %b %Y".into(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }
}
