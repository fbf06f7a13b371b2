//! Policy-week calendar math.
//!
//! A policy week is the run of 7 consecutive dates starting on the
//! configured weekday. All week arithmetic in the crate goes through these
//! helpers so that every query agrees on week boundaries.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Length of a policy week. Weeks never shrink, even at range boundaries.
pub const DAYS_PER_WEEK: u8 = 7;

/// Returns the start of the policy week containing `date`.
pub fn week_start_for(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday()
        - week_starts_on.num_days_from_monday())
        % 7;
    date - Days::new(u64::from(offset))
}

/// Returns the last date of the week starting at `week_start`.
pub fn week_end(week_start: NaiveDate) -> NaiveDate {
    week_start + Days::new(u64::from(DAYS_PER_WEEK) - 1)
}

/// Iterates the 7 dates of the week starting at `week_start`.
pub fn week_dates(week_start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..u64::from(DAYS_PER_WEEK)).map(move |offset| week_start + Days::new(offset))
}

/// Returns the week start `weeks` whole weeks after `week_start`.
pub fn weeks_after(week_start: NaiveDate, weeks: u64) -> NaiveDate {
    week_start + Days::new(weeks * u64::from(DAYS_PER_WEEK))
}

/// Returns the week start `weeks` whole weeks before `week_start`.
pub fn weeks_before(week_start: NaiveDate, weeks: u64) -> NaiveDate {
    week_start - Days::new(weeks * u64::from(DAYS_PER_WEEK))
}

#[cfg(test)]
mod tests {
    use super::{week_dates, week_end, week_start_for, weeks_after, weeks_before};
    use chrono::{NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_maps_every_day_onto_monday() {
        let monday = date(2024, 6, 3);
        for offset in 0..7 {
            let day = date(2024, 6, 3 + offset);
            assert_eq!(week_start_for(day, Weekday::Mon), monday);
        }
        assert_eq!(week_start_for(date(2024, 6, 10), Weekday::Mon), date(2024, 6, 10));
    }

    #[test]
    fn week_start_honors_non_monday_week_definition() {
        // Sunday-based weeks: Sat 2024-06-08 belongs to the week of Sun 2024-06-02.
        assert_eq!(week_start_for(date(2024, 6, 8), Weekday::Sun), date(2024, 6, 2));
        assert_eq!(week_start_for(date(2024, 6, 9), Weekday::Sun), date(2024, 6, 9));
    }

    #[test]
    fn week_dates_spans_exactly_one_week() {
        let days: Vec<_> = week_dates(date(2024, 6, 3)).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 6, 3));
        assert_eq!(days[6], date(2024, 6, 9));
        assert_eq!(week_end(date(2024, 6, 3)), date(2024, 6, 9));
    }

    #[test]
    fn week_stepping_is_symmetric() {
        let week = date(2024, 6, 3);
        assert_eq!(weeks_after(week, 5), date(2024, 7, 8));
        assert_eq!(weeks_before(weeks_after(week, 12), 12), week);
    }
}
