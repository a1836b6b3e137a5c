//! JSON data files with crash-safe replacement
//!
//! A data file is only ever replaced by renaming a fully written sibling
//! (`<name>.json.tmp`) over it. When any step of a write fails the sibling
//! is removed and the previous contents stay in place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{HseError, HseResult};

/// A JSON document on disk, such as `weekly_reports.json`
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling the next write is staged in
    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Read the document. A missing or blank file reads as `T::default()`
    /// so a fresh data directory needs no seeding.
    pub fn load<T>(&self) -> HseResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(self.error("read", e)),
        };

        if contents.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&contents).map_err(|e| self.error("parse", e))
    }

    /// Replace the document with `data`
    pub fn store<T>(&self, data: &T) -> HseResult<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                HseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let staging = self.staging_path();
        let result = self
            .write_staged(&staging, data)
            .and_then(|()| fs::rename(&staging, &self.path).map_err(|e| self.error("replace", e)));

        if result.is_err() {
            let _ = fs::remove_file(&staging);
        }
        result
    }

    fn write_staged<T: Serialize>(&self, staging: &Path, data: &T) -> HseResult<()> {
        let file = File::create(staging).map_err(|e| {
            HseError::Storage(format!("Failed to create {}: {}", staging.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data).map_err(|e| self.error("serialize", e))?;
        writer.flush().map_err(|e| self.error("write", e))?;
        writer.get_ref().sync_all().map_err(|e| self.error("sync", e))
    }

    fn error(&self, action: &str, e: impl std::fmt::Display) -> HseError {
        HseError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}
