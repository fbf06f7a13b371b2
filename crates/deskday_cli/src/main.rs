//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load the attendance document and print the current week's standing.
//! - Keep output deterministic, one fact per line, for quick local checks.

use std::process::ExitCode;

use chrono::Local;
use deskday_core::{AttendanceLedger, JsonFileStore, WeeklyPolicy};

const DEFAULT_DATA_FILE: &str = "attendance_data.json";

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DESKDAY_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let ledger = match AttendanceLedger::open(JsonFileStore::new(&path)) {
        Ok(ledger) => ledger,
        Err(err) => {
            eprintln!("deskday: cannot open `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let policy = WeeklyPolicy::default();
    let today = Local::now().date_naive();
    let week = ledger.weekly_compliance(today, &policy);

    println!("deskday_core version={}", deskday_core::core_version());
    println!(
        "week_start={} in_office={} ooo={} unmarked={} compliant={}",
        week.week_start, week.in_office_days, week.ooo_days, week.unmarked_days, week.is_compliant
    );

    // Today's week can never be fully elapsed, so projection cannot fail
    // here; surface the error anyway rather than masking it.
    match ledger.project_requirement(today, &policy, today) {
        Ok(projection) => {
            println!(
                "days_short={} remaining={} feasible={}",
                projection.days_short, projection.remaining_days, projection.feasible
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("deskday: {err}");
            ExitCode::FAILURE
        }
    }
}
