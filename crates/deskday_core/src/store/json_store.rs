//! JSON file persistence for the attendance document.
//!
//! # Responsibility
//! - Read and write the date→status mapping as a single JSON object.
//! - Replace the document atomically on save.
//!
//! # Invariants
//! - Keys are ISO-8601 dates (`YYYY-MM-DD`); values are `in_office` or
//!   `ooo`. Unmarked dates are absent keys.
//! - Save writes a sibling temp file and renames it into place, so a
//!   reader never observes a partially written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};

use super::{LedgerStore, StoreError, StoreResult};
use crate::model::day::DayMap;

/// Behavior when the persisted document does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// Treat a missing file as an empty ledger (first run).
    #[default]
    EmptyLedger,
    /// Surface `StoreError::MissingFile` instead.
    Error,
}

/// File-backed store holding the ledger as one JSON document.
pub struct JsonFileStore {
    path: PathBuf,
    missing_file: MissingFilePolicy,
}

impl JsonFileStore {
    /// Creates a store that treats a missing document as an empty ledger.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_missing_file_policy(path, MissingFilePolicy::default())
    }

    /// Creates a store with an explicit missing-file policy.
    pub fn with_missing_file_policy(path: impl Into<PathBuf>, policy: MissingFilePolicy) -> Self {
        Self {
            path: path.into(),
            missing_file: policy,
        }
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_document(&self, days: &DayMap) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(days).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        // Temp file lives next to the target so the rename stays on one
        // filesystem and therefore atomic.
        let temp = self.temp_path();
        fs::write(&temp, &json).map_err(|err| self.io_error(err))?;
        fs::rename(&temp, &self.path).map_err(|err| self.io_error(err))?;
        Ok(())
    }
}

impl LedgerStore for JsonFileStore {
    fn load_all(&self) -> StoreResult<DayMap> {
        let started_at = Instant::now();

        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return match self.missing_file {
                    MissingFilePolicy::EmptyLedger => {
                        info!(
                            "event=store_load module=store status=ok mode=missing_file entries=0 duration_ms={}",
                            started_at.elapsed().as_millis()
                        );
                        Ok(DayMap::new())
                    }
                    MissingFilePolicy::Error => {
                        error!(
                            "event=store_load module=store status=error error_code=missing_file path={}",
                            self.path.display()
                        );
                        Err(StoreError::MissingFile(self.path.clone()))
                    }
                };
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=io error={err}"
                );
                return Err(self.io_error(err));
            }
        };

        match serde_json::from_slice::<DayMap>(&raw) {
            Ok(days) => {
                info!(
                    "event=store_load module=store status=ok entries={} duration_ms={}",
                    days.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(days)
            }
            Err(source) => {
                error!(
                    "event=store_load module=store status=error error_code=malformed error={source}"
                );
                Err(StoreError::Malformed {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    fn save_all(&self, days: &DayMap) -> StoreResult<()> {
        let started_at = Instant::now();

        match self.write_document(days) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok entries={} duration_ms={}",
                    days.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}
