//! Domain model for the attendance ledger.
//!
//! # Responsibility
//! - Define the canonical per-date status and the policy parameters.
//! - Provide the policy-week calendar math shared by every query.
//!
//! # Invariants
//! - Every date carries at most one status; absence means "unmarked".
//! - A policy week is always 7 consecutive dates starting on the
//!   configured weekday.

pub mod day;
pub mod policy;
pub mod report;
pub mod week;
