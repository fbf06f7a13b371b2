//! Core domain logic for DeskDay, a single-user office-attendance ledger.
//! This crate is the single source of truth for policy arithmetic.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::{parse_day_status, DayMap, DayStatus};
pub use model::policy::{parse_weekday, RollingPolicy, WeeklyPolicy, WORKWEEK_DAYS};
pub use model::report::{
    RollingCompliance, WeekCompliance, WeekProjection, WeekSuggestion, WeekTally,
};
pub use model::week::{week_dates, week_end, week_start_for, DAYS_PER_WEEK};
pub use service::ledger_service::{AttendanceLedger, LedgerError, LedgerResult, WeekSummaries};
pub use store::{
    JsonFileStore, LedgerStore, MemoryStore, MissingFilePolicy, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
