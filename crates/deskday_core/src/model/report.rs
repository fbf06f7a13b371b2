//! Query result records.
//!
//! Plain data handed to presentation layers; serializable so summaries can
//! be exported as-is.

use chrono::NaiveDate;
use serde::Serialize;

/// Compliance summary for one policy week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekCompliance {
    /// First date of the summarized week.
    pub week_start: NaiveDate,
    /// Dates in the week marked in-office.
    pub in_office_days: u8,
    /// Dates in the week marked out of office.
    pub ooo_days: u8,
    /// Dates in the week with no marker; always `7 - in_office - ooo`.
    pub unmarked_days: u8,
    /// How far the week falls below the requirement, floored at zero.
    pub days_short: u8,
    /// Whether `in_office_days` meets the weekly requirement.
    pub is_compliant: bool,
}

/// Forward-looking feasibility check for a week that has not fully elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekProjection {
    /// First date of the projected week.
    pub week_start: NaiveDate,
    /// Unmarked dates from today (or the week start, if later) to week end.
    pub remaining_days: u8,
    /// Current shortfall, as in the week's compliance summary.
    pub days_short: u8,
    /// Whether the shortfall still fits into the remaining days.
    pub feasible: bool,
}

/// In-office day count for one week, used by rolling-window queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekTally {
    pub week_start: NaiveDate,
    pub in_office_days: u32,
}

/// Result of a rolling best-weeks compliance query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollingCompliance {
    /// Week start the window was anchored to (exclusive upper bound).
    pub reference_week: NaiveDate,
    /// Sum of the counted best weekly tallies.
    pub counted_days: u32,
    /// Days still missing toward the rolling requirement, floored at zero.
    pub shortfall: u32,
    /// The counted weeks, best tally first; ties in calendar order.
    pub best_weeks: Vec<WeekTally>,
}

/// Suggested in-office days for one upcoming week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekSuggestion {
    pub week_start: NaiveDate,
    pub suggested_days: u32,
}
