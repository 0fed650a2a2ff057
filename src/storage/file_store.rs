//! JSON file record store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::UserRecord;

/// A file-backed store for user records.
///
/// Records are persisted as a pretty-printed JSON array keyed by date with
/// last-write-wins semantics: upserting a record replaces any existing
/// record for the same date. There is no versioning and no conflict
/// detection.
///
/// A missing store file reads as an empty record set; malformed persisted
/// JSON is an error rather than an empty set, since a silent empty read
/// followed by an upsert would overwrite the store.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::models::{RecordStatus, UserRecord};
/// use attendance_engine::storage::FileRecordStore;
/// use chrono::NaiveDate;
///
/// let store = FileRecordStore::new("./data/records.json");
/// store.upsert(UserRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
///     status: RecordStatus::LeaveFull,
/// })?;
///
/// let records = store.read()?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first read or write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all persisted records.
    ///
    /// A missing file yields an empty vector. Order is not significant; the
    /// store guarantees at most one record per date.
    pub fn read(&self) -> EngineResult<Vec<UserRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let path_str = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|e| EngineError::StorageIo {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| EngineError::RecordParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Inserts or replaces the record for its date.
    ///
    /// Last write wins: any existing record with the same date is removed
    /// before the new one is appended. Returns the saved record.
    pub fn upsert(&self, record: UserRecord) -> EngineResult<UserRecord> {
        let mut records = self.read()?;
        records.retain(|r| r.date != record.date);
        records.push(record.clone());
        self.write(&records)?;
        Ok(record)
    }

    /// Deletes the record for a date, if one exists.
    ///
    /// Deleting a date with no record is a no-op, not an error.
    pub fn delete(&self, date: NaiveDate) -> EngineResult<()> {
        let mut records = self.read()?;
        records.retain(|r| r.date != date);
        self.write(&records)
    }

    /// Writes the full record set, creating parent directories as needed.
    fn write(&self, records: &[UserRecord]) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| EngineError::StorageIo {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
        }

        let json =
            serde_json::to_string_pretty(records).map_err(|e| EngineError::StorageIo {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, json).map_err(|e| EngineError::StorageIo {
            path: path_str,
            message: e.to_string(),
        })
    }
}
