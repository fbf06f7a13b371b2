//! Attendance policy parameters.
//!
//! Policies are supplied per query and never stored next to the records,
//! so recomputing a past week under a new policy is just another query.

use chrono::Weekday;

/// Number of office-eligible days in a working week.
pub const WORKWEEK_DAYS: u8 = 5;

/// Per-week attendance requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyPolicy {
    /// Minimum in-office days required per policy week.
    pub required_days_per_week: u8,
    /// Weekday on which a policy week begins.
    pub week_starts_on: Weekday,
}

impl Default for WeeklyPolicy {
    fn default() -> Self {
        Self {
            required_days_per_week: 3,
            week_starts_on: Weekday::Mon,
        }
    }
}

/// Rolling requirement measured over a trailing window of weeks: only the
/// best `counted_weeks` weekly tallies inside the window count toward the
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingPolicy {
    /// Total in-office days required across the counted weeks.
    pub required_days: u32,
    /// How many trailing weeks are eligible.
    pub window_weeks: u32,
    /// How many of the best eligible weeks are counted.
    pub counted_weeks: usize,
}

impl Default for RollingPolicy {
    fn default() -> Self {
        Self {
            required_days: 24,
            window_weeks: 12,
            counted_weeks: 8,
        }
    }
}

/// Parses a human-entered weekday name from config or CLI input.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_weekday, RollingPolicy, WeeklyPolicy};
    use chrono::Weekday;

    #[test]
    fn defaults_match_documented_policy() {
        let weekly = WeeklyPolicy::default();
        assert_eq!(weekly.required_days_per_week, 3);
        assert_eq!(weekly.week_starts_on, Weekday::Mon);

        let rolling = RollingPolicy::default();
        assert_eq!(rolling.required_days, 24);
        assert_eq!(rolling.window_weeks, 12);
        assert_eq!(rolling.counted_weeks, 8);
    }

    #[test]
    fn parse_weekday_accepts_short_and_long_names() {
        assert_eq!(parse_weekday("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday(" sun "), Some(Weekday::Sun));
        assert_eq!(parse_weekday("someday"), None);
    }
}
