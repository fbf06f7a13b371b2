//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage access into session-level ledger APIs.
//! - Keep presentation layers decoupled from persistence details.

pub mod ledger_service;
