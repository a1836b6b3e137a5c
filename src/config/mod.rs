//! Configuration module for the HSE KPI tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HsePaths;
pub use settings::Settings;
