//! In-memory store for tests and embedding.

use std::cell::RefCell;

use super::{LedgerStore, StoreResult};
use crate::model::day::DayMap;

/// Store keeping the document in memory, with the same full-replace
/// semantics as the file-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    days: RefCell<DayMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing document. Used by test fixtures.
    pub fn with_days(days: DayMap) -> Self {
        Self {
            days: RefCell::new(days),
        }
    }

    /// Returns a copy of the currently stored document.
    pub fn snapshot(&self) -> DayMap {
        self.days.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load_all(&self) -> StoreResult<DayMap> {
        Ok(self.days.borrow().clone())
    }

    fn save_all(&self, days: &DayMap) -> StoreResult<()> {
        *self.days.borrow_mut() = days.clone();
        Ok(())
    }
}
