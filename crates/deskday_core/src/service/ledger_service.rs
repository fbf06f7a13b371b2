//! Attendance ledger use-case service.
//!
//! # Responsibility
//! - Own the in-memory date→status mapping for one session.
//! - Answer compliance, projection, summary, and planning queries.
//! - Delegate persistence to a `LedgerStore` after every mutation.
//!
//! # Invariants
//! - Re-marking a date overwrites; the ledger never holds two statuses for
//!   one date.
//! - Query methods are pure reads over the loaded mapping.
//! - Every successful mutation leaves the full document saved.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use log::debug;

use crate::model::day::{DayMap, DayStatus};
use crate::model::policy::{RollingPolicy, WeeklyPolicy, WORKWEEK_DAYS};
use crate::model::report::{
    RollingCompliance, WeekCompliance, WeekProjection, WeekSuggestion, WeekTally,
};
use crate::model::week::{week_dates, week_end, week_start_for, weeks_after, weeks_before, DAYS_PER_WEEK};
use crate::store::{LedgerStore, StoreError};

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error surface of ledger operations.
///
/// Marking and compliance arithmetic are total; only persistence and
/// elapsed-week projections can fail.
#[derive(Debug)]
pub enum LedgerError {
    /// Persistence failed on load or save.
    Store(StoreError),
    /// Projection was requested for a week that has fully elapsed.
    InvalidPeriod {
        week_start: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidPeriod { week_start, today } => write!(
                f,
                "week starting {week_start} fully elapsed by {today}; projection applies to current or future weeks"
            ),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidPeriod { .. } => None,
        }
    }
}

impl From<StoreError> for LedgerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Single-session attendance ledger over a storage backend.
///
/// The ledger is an explicit object owned by the session context; there is
/// no process-wide instance. Exactly one session mutates a document at a
/// time: state is loaded wholesale at `open` and the full document is
/// rewritten after each mutation.
pub struct AttendanceLedger<S: LedgerStore> {
    store: S,
    days: DayMap,
}

impl<S: LedgerStore> AttendanceLedger<S> {
    /// Loads the full document from `store` and starts a session.
    pub fn open(store: S) -> LedgerResult<Self> {
        let days = store.load_all()?;
        debug!(
            "event=ledger_open module=service status=ok entries={}",
            days.len()
        );
        Ok(Self { store, days })
    }

    /// Sets or overwrites the status for `date`, then persists.
    ///
    /// Any past or future date is valid: planned attendance and future
    /// leave are first-class. Re-marking overwrites, never appends.
    pub fn mark_date(&mut self, date: NaiveDate, status: DayStatus) -> LedgerResult<()> {
        let previous = self.days.insert(date, status);
        if let Err(err) = self.store.save_all(&self.days) {
            // The session view must keep mirroring the persisted document.
            match previous {
                Some(prev) => self.days.insert(date, prev),
                None => self.days.remove(&date),
            };
            return Err(err.into());
        }
        debug!(
            "event=mark_date module=service status=ok date={date} value={}",
            status.as_str()
        );
        Ok(())
    }

    /// Removes the marker for `date`, returning whether one existed.
    ///
    /// Persists only when an entry was actually removed.
    pub fn clear_date(&mut self, date: NaiveDate) -> LedgerResult<bool> {
        let Some(previous) = self.days.remove(&date) else {
            return Ok(false);
        };
        if let Err(err) = self.store.save_all(&self.days) {
            self.days.insert(date, previous);
            return Err(err.into());
        }
        debug!("event=clear_date module=service status=ok date={date}");
        Ok(true)
    }

    /// Returns the stored status for `date`, if marked.
    pub fn status_of(&self, date: NaiveDate) -> Option<DayStatus> {
        self.days.get(&date).copied()
    }

    /// Iterates all marked dates in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.days.iter().map(|(date, status)| (*date, *status))
    }

    /// Computes the compliance summary for the policy week containing
    /// `week_start`.
    ///
    /// The argument is normalized onto the policy week boundary, so any
    /// date inside the week is accepted.
    pub fn weekly_compliance(&self, week_start: NaiveDate, policy: &WeeklyPolicy) -> WeekCompliance {
        compliance_for_week(
            &self.days,
            week_start_for(week_start, policy.week_starts_on),
            policy,
        )
    }

    /// Checks whether the week containing `week_start` can still meet the
    /// policy as of `today`.
    ///
    /// # Errors
    /// - `LedgerError::InvalidPeriod` when the week ended before `today`;
    ///   projection only applies to the current or future weeks.
    pub fn project_requirement(
        &self,
        week_start: NaiveDate,
        policy: &WeeklyPolicy,
        today: NaiveDate,
    ) -> LedgerResult<WeekProjection> {
        let week_start = week_start_for(week_start, policy.week_starts_on);
        if week_end(week_start) < today {
            return Err(LedgerError::InvalidPeriod { week_start, today });
        }

        let compliance = compliance_for_week(&self.days, week_start, policy);
        let from = week_start.max(today);
        let remaining_days = week_dates(week_start)
            .filter(|date| *date >= from && !self.days.contains_key(date))
            .count() as u8;

        Ok(WeekProjection {
            week_start,
            remaining_days,
            days_short: compliance.days_short,
            // A requirement above 7 days needs no special case: the
            // shortfall can never fit the remaining slots.
            feasible: compliance.days_short <= remaining_days,
        })
    }

    /// Returns a lazy iterator of per-week summaries covering every policy
    /// week that intersects the inclusive `range`, ascending by week start.
    ///
    /// Boundary weeks keep their full 7-day window even where it extends
    /// outside the range. The iterator is `Clone`; cloning it before the
    /// first call to `next` gives a restartable pass for export paths.
    pub fn summarize(
        &self,
        range: RangeInclusive<NaiveDate>,
        policy: &WeeklyPolicy,
    ) -> WeekSummaries<'_> {
        WeekSummaries {
            days: &self.days,
            policy: *policy,
            next_week: week_start_for(*range.start(), policy.week_starts_on),
            last_week: week_start_for(*range.end(), policy.week_starts_on),
            exhausted: range.start() > range.end(),
        }
    }

    /// Totals the best `counted_weeks` weekly in-office tallies over the
    /// `window_weeks` policy weeks strictly before the week containing
    /// `reference_week`.
    pub fn rolling_compliance(
        &self,
        reference_week: NaiveDate,
        weekly: &WeeklyPolicy,
        rolling: &RollingPolicy,
    ) -> RollingCompliance {
        let cutoff = week_start_for(reference_week, weekly.week_starts_on);
        let earliest = weeks_before(cutoff, u64::from(rolling.window_weeks));

        let mut tallies: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for (date, status) in &self.days {
            if *status != DayStatus::InOffice {
                continue;
            }
            let week = week_start_for(*date, weekly.week_starts_on);
            if week >= earliest && week < cutoff {
                *tallies.entry(week).or_insert(0) += 1;
            }
        }

        let mut best_weeks: Vec<WeekTally> = tallies
            .into_iter()
            .map(|(week_start, in_office_days)| WeekTally {
                week_start,
                in_office_days,
            })
            .collect();
        // Highest tallies first; equal tallies keep calendar order.
        best_weeks.sort_by(|a, b| {
            b.in_office_days
                .cmp(&a.in_office_days)
                .then(a.week_start.cmp(&b.week_start))
        });
        best_weeks.truncate(rolling.counted_weeks);

        let counted_days: u32 = best_weeks.iter().map(|tally| tally.in_office_days).sum();
        RollingCompliance {
            reference_week: cutoff,
            counted_days,
            shortfall: rolling.required_days.saturating_sub(counted_days),
            best_weeks,
        }
    }

    /// Spreads the current rolling shortfall over upcoming weeks.
    ///
    /// Candidate weeks run chronologically from the week containing
    /// `today` through five weeks past `reference_week`. Each week can
    /// absorb at most the weekly requirement, less any days already marked
    /// out of office, never below zero. Weeks after the shortfall is
    /// consumed get a suggestion of zero.
    pub fn plan_shortfall(
        &self,
        today: NaiveDate,
        reference_week: NaiveDate,
        weekly: &WeeklyPolicy,
        rolling: &RollingPolicy,
    ) -> Vec<WeekSuggestion> {
        let mut shortfall = self
            .rolling_compliance(reference_week, weekly, rolling)
            .shortfall;
        let start_week = week_start_for(today, weekly.week_starts_on);
        let end_week = weeks_after(week_start_for(reference_week, weekly.week_starts_on), 5);

        let mut plan = Vec::new();
        let mut week = start_week;
        while week <= end_week {
            let ooo_days = week_dates(week)
                .filter(|date| self.days.get(date) == Some(&DayStatus::OutOfOffice))
                .count() as u32;
            let open_days = u32::from(WORKWEEK_DAYS).saturating_sub(ooo_days);
            let available = open_days.min(u32::from(weekly.required_days_per_week));
            let suggested_days = available.min(shortfall);
            shortfall -= suggested_days;
            plan.push(WeekSuggestion {
                week_start: week,
                suggested_days,
            });
            week = weeks_after(week, 1);
        }
        plan
    }
}

/// Lazy per-week summary sequence produced by [`AttendanceLedger::summarize`].
#[derive(Debug, Clone)]
pub struct WeekSummaries<'a> {
    days: &'a DayMap,
    policy: WeeklyPolicy,
    next_week: NaiveDate,
    last_week: NaiveDate,
    exhausted: bool,
}

impl Iterator for WeekSummaries<'_> {
    type Item = WeekCompliance;

    fn next(&mut self) -> Option<WeekCompliance> {
        if self.exhausted || self.next_week > self.last_week {
            return None;
        }
        let summary = compliance_for_week(self.days, self.next_week, &self.policy);
        self.next_week = weeks_after(self.next_week, 1);
        Some(summary)
    }
}

/// Pure weekly tally over stored entries.
///
/// `week_start` must already be aligned to the policy week boundary.
fn compliance_for_week(days: &DayMap, week_start: NaiveDate, policy: &WeeklyPolicy) -> WeekCompliance {
    let mut in_office_days = 0u8;
    let mut ooo_days = 0u8;
    for date in week_dates(week_start) {
        match days.get(&date) {
            Some(DayStatus::InOffice) => in_office_days += 1,
            Some(DayStatus::OutOfOffice) => ooo_days += 1,
            None => {}
        }
    }

    let days_short = policy.required_days_per_week.saturating_sub(in_office_days);
    WeekCompliance {
        week_start,
        in_office_days,
        ooo_days,
        unmarked_days: DAYS_PER_WEEK - in_office_days - ooo_days,
        days_short,
        is_compliant: days_short == 0,
    }
}
