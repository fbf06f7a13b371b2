use chrono::{Days, NaiveDate};
use deskday_core::{
    AttendanceLedger, DayStatus, MemoryStore, RollingPolicy, WeeklyPolicy,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weeks_before(week_start: NaiveDate, weeks: u64) -> NaiveDate {
    week_start - Days::new(weeks * 7)
}

fn mark_office_days(ledger: &mut AttendanceLedger<MemoryStore>, week_start: NaiveDate, count: u64) {
    for offset in 0..count {
        ledger
            .mark_date(week_start + Days::new(offset), DayStatus::InOffice)
            .unwrap();
    }
}

#[test]
fn only_the_best_weeks_in_the_window_are_counted() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    let cutoff = date(2024, 6, 3);

    // Four weak weeks (1 day) and eight strong weeks (3 days) in the window.
    for k in 1..=4 {
        mark_office_days(&mut ledger, weeks_before(cutoff, k), 1);
    }
    for k in 5..=12 {
        mark_office_days(&mut ledger, weeks_before(cutoff, k), 3);
    }

    let rolling = ledger.rolling_compliance(cutoff, &WeeklyPolicy::default(), &RollingPolicy::default());

    assert_eq!(rolling.reference_week, cutoff);
    assert_eq!(rolling.best_weeks.len(), 8);
    assert!(rolling.best_weeks.iter().all(|tally| tally.in_office_days == 3));
    assert_eq!(rolling.counted_days, 24);
    assert_eq!(rolling.shortfall, 0);
}

#[test]
fn the_cutoff_week_and_weeks_past_the_window_are_ignored() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    let cutoff = date(2024, 6, 3);

    mark_office_days(&mut ledger, cutoff, 3);
    mark_office_days(&mut ledger, weeks_before(cutoff, 13), 3);

    let rolling = ledger.rolling_compliance(cutoff, &WeeklyPolicy::default(), &RollingPolicy::default());

    assert!(rolling.best_weeks.is_empty());
    assert_eq!(rolling.counted_days, 0);
    assert_eq!(rolling.shortfall, 24);
}

#[test]
fn ooo_days_never_count_toward_tallies() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    let cutoff = date(2024, 6, 3);
    let week = weeks_before(cutoff, 2);

    for offset in 0..5 {
        ledger.mark_date(week + Days::new(offset), DayStatus::OutOfOffice).unwrap();
    }
    ledger.mark_date(weeks_before(cutoff, 1), DayStatus::InOffice).unwrap();

    let rolling = ledger.rolling_compliance(cutoff, &WeeklyPolicy::default(), &RollingPolicy::default());

    assert_eq!(rolling.best_weeks.len(), 1);
    assert_eq!(rolling.counted_days, 1);
}

#[test]
fn equal_tallies_break_ties_in_calendar_order() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    let cutoff = date(2024, 6, 3);

    for k in 1..=3 {
        mark_office_days(&mut ledger, weeks_before(cutoff, k), 2);
    }

    let rolling_policy = RollingPolicy {
        required_days: 10,
        window_weeks: 12,
        counted_weeks: 2,
    };
    let rolling = ledger.rolling_compliance(cutoff, &WeeklyPolicy::default(), &rolling_policy);

    assert_eq!(rolling.counted_days, 4);
    assert_eq!(rolling.shortfall, 6);
    let counted: Vec<_> = rolling.best_weeks.iter().map(|tally| tally.week_start).collect();
    assert_eq!(counted, vec![weeks_before(cutoff, 3), weeks_before(cutoff, 2)]);
}

#[test]
fn plan_spreads_the_shortfall_chronologically() {
    let ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();

    // Nothing marked: full 24-day shortfall over 8 candidate weeks.
    let plan = ledger.plan_shortfall(
        date(2024, 6, 5),
        date(2024, 6, 17),
        &WeeklyPolicy::default(),
        &RollingPolicy::default(),
    );

    assert_eq!(plan.len(), 8);
    assert_eq!(plan[0].week_start, date(2024, 6, 3));
    assert_eq!(plan[7].week_start, date(2024, 7, 22));
    assert!(plan.iter().all(|week| week.suggested_days == 3));
    assert_eq!(plan.iter().map(|week| week.suggested_days).sum::<u32>(), 24);
}

#[test]
fn plan_stops_suggesting_once_the_shortfall_is_consumed() {
    let ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();

    let rolling_policy = RollingPolicy {
        required_days: 4,
        window_weeks: 12,
        counted_weeks: 8,
    };
    let plan = ledger.plan_shortfall(
        date(2024, 6, 5),
        date(2024, 6, 10),
        &WeeklyPolicy::default(),
        &rolling_policy,
    );

    let suggested: Vec<_> = plan.iter().map(|week| week.suggested_days).collect();
    assert_eq!(suggested, vec![3, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn ooo_days_reduce_a_weeks_availability() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    for offset in 0..3 {
        ledger
            .mark_date(date(2024, 6, 3) + Days::new(offset), DayStatus::OutOfOffice)
            .unwrap();
    }

    let rolling_policy = RollingPolicy {
        required_days: 4,
        window_weeks: 12,
        counted_weeks: 8,
    };
    let plan = ledger.plan_shortfall(
        date(2024, 6, 5),
        date(2024, 6, 10),
        &WeeklyPolicy::default(),
        &rolling_policy,
    );

    // Week one has only two open office days left.
    let suggested: Vec<_> = plan.iter().map(|week| week.suggested_days).collect();
    assert_eq!(suggested, vec![2, 2, 0, 0, 0, 0, 0]);
}

#[test]
fn a_week_dominated_by_ooo_is_skipped_not_negative() {
    let mut ledger = AttendanceLedger::open(MemoryStore::new()).unwrap();
    for offset in 0..6 {
        ledger
            .mark_date(date(2024, 6, 3) + Days::new(offset), DayStatus::OutOfOffice)
            .unwrap();
    }

    let rolling_policy = RollingPolicy {
        required_days: 4,
        window_weeks: 12,
        counted_weeks: 8,
    };
    let plan = ledger.plan_shortfall(
        date(2024, 6, 5),
        date(2024, 6, 10),
        &WeeklyPolicy::default(),
        &rolling_policy,
    );

    let suggested: Vec<_> = plan.iter().map(|week| week.suggested_days).collect();
    assert_eq!(suggested, vec![0, 3, 1, 0, 0, 0, 0]);
}
