//! Persistence boundary for the attendance document.
//!
//! # Responsibility
//! - Define the load-all/save-all storage contract consumed by the ledger.
//! - Keep file-format details inside the store implementations.
//!
//! # Invariants
//! - Stores always read and write the full document; there are no partial
//!   updates.
//! - A save must never leave a half-written document behind.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::model::day::DayMap;

mod json_store;
mod memory;

pub use json_store::{JsonFileStore, MissingFilePolicy};
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for ledger persistence.
///
/// Surfaced to the caller unchanged; persistence is local and
/// deterministic, so nothing here is retried.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure on load or save.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document exists but its content does not decode (or the
    /// in-memory map failed to encode, which would be a bug).
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document is absent and the store was configured strict.
    MissingFile(PathBuf),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failure at `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(
                    f,
                    "malformed attendance document at `{}`: {source}",
                    path.display()
                )
            }
            Self::MissingFile(path) => {
                write!(f, "attendance document not found at `{}`", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::MissingFile(_) => None,
        }
    }
}

/// Storage contract for the date→status document.
pub trait LedgerStore {
    /// Reads the full document.
    fn load_all(&self) -> StoreResult<DayMap>;
    /// Replaces the full document.
    fn save_all(&self, days: &DayMap) -> StoreResult<()>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load_all(&self) -> StoreResult<DayMap> {
        (**self).load_all()
    }

    fn save_all(&self, days: &DayMap) -> StoreResult<()> {
        (**self).save_all(days)
    }
}
