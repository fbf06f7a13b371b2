//! Per-date status model.
//!
//! # Responsibility
//! - Define the closed set of markers a calendar date can carry.
//! - Pin the wire names used by the persisted document.
//!
//! # Invariants
//! - "Unmarked" is the absence of an entry, never a third variant, so it
//!   can never be persisted by accident.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full ledger content: one optional status per calendar date.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The ordered map doubles as the persisted document shape.
pub type DayMap = BTreeMap<NaiveDate, DayStatus>;

/// Explicit marker for a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Present in the office for the day.
    InOffice,
    /// Out of office: leave, remote work, travel.
    #[serde(rename = "ooo")]
    OutOfOffice,
}

impl DayStatus {
    /// Returns the wire name, which is also the display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InOffice => "in_office",
            Self::OutOfOffice => "ooo",
        }
    }
}

/// Parses a wire/display name back into a status.
pub fn parse_day_status(value: &str) -> Option<DayStatus> {
    match value {
        "in_office" => Some(DayStatus::InOffice),
        "ooo" => Some(DayStatus::OutOfOffice),
        _ => None,
    }
}
