//! Weekly report repository for JSON storage
//!
//! Manages loading and saving weekly KPI reports to weekly_reports.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HseError;
use crate::models::report::normalize_name;
use crate::models::{ReportId, WeeklyReport};

use super::file_io::DataFile;

/// Serializable report data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ReportData {
    reports: Vec<WeeklyReport>,
}

/// Repository for weekly report persistence
pub struct WeeklyReportRepository {
    file: DataFile,
    data: RwLock<HashMap<ReportId, WeeklyReport>>,
}

impl WeeklyReportRepository {
    /// Create a new report repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: DataFile::new(path),
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load reports from disk
    pub fn load(&self) -> Result<(), HseError> {
        let file_data: ReportData = self.file.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| HseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for report in file_data.reports {
            data.insert(report.id, report);
        }

        Ok(())
    }

    /// Save reports to disk
    pub fn save(&self) -> Result<(), HseError> {
        let reports = self.get_all()?;
        self.file.store(&ReportData { reports })
    }

    /// Get a report by ID
    pub fn get(&self, id: ReportId) -> Result<Option<WeeklyReport>, HseError> {
        let data = self
            .data
            .read()
            .map_err(|e| HseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all reports, ordered by fiscal week then project and zone
    pub fn get_all(&self) -> Result<Vec<WeeklyReport>, HseError> {
        let data = self
            .data
            .read()
            .map_err(|e| HseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut reports: Vec<_> = data.values().cloned().collect();
        reports.sort_by_cached_key(|r| {
            (r.year, r.week, normalize_name(&r.project), normalize_name(&r.zone))
        });
        Ok(reports)
    }

    /// Find the report submitted for the same project, zone and week, if any
    pub fn find_duplicate(&self, report: &WeeklyReport) -> Result<Option<WeeklyReport>, HseError> {
        let data = self
            .data
            .read()
            .map_err(|e| HseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let key = report.dedup_key();
        Ok(data
            .values()
            .find(|existing| existing.id != report.id && existing.dedup_key() == key)
            .cloned())
    }

    /// Insert or update a report
    pub fn upsert(&self, report: WeeklyReport) -> Result<(), HseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| HseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(report.id, report);
        Ok(())
    }

    /// Delete a report
    pub fn delete(&self, id: ReportId) -> Result<bool, HseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| HseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count reports
    pub fn count(&self) -> Result<usize, HseError> {
        let data = self
            .data
            .read()
            .map_err(|e| HseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KpiMetrics, WeekIdentifier};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, WeeklyReportRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekly_reports.json");
        let repo = WeeklyReportRepository::new(path);
        (temp_dir, repo)
    }

    fn report(project: &str, week: u32) -> WeeklyReport {
        WeeklyReport::new(
            project,
            "Zone A",
            WeekIdentifier::new(week, 2026).unwrap(),
            KpiMetrics::default(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let r = report("Pipeline", 4);
        let id = r.id;

        repo.upsert(r).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.project, "Pipeline");
        assert_eq!(retrieved.week, 4);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(report("Pipeline", 4)).unwrap();
        repo.upsert(report("Pipeline", 2)).unwrap();
        repo.save().unwrap();

        let repo2 = WeeklyReportRepository::new(temp_dir.path().join("weekly_reports.json"));
        repo2.load().unwrap();

        let all = repo2.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].week, 2);
        assert_eq!(all[1].week, 4);
    }

    #[test]
    fn test_find_duplicate() {
        let (_temp_dir, repo) = create_test_repo();
        let original = report("Pipeline", 4);
        repo.upsert(original.clone()).unwrap();

        assert!(repo.find_duplicate(&original).unwrap().is_none());

        let again = report("PIPELINE", 4);
        let dup = repo.find_duplicate(&again).unwrap().unwrap();
        assert_eq!(dup.id, original.id);

        assert!(repo.find_duplicate(&report("Pipeline", 5)).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let r = report("Pipeline", 4);
        let id = r.id;
        repo.upsert(r).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
