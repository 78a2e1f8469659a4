//! Conformance checks, one module per ledger obligation.
//!
//! Each check receives a fresh ledger and returns `Err(message)` naming the
//! obligation it failed.

pub mod c03_status_update;
pub mod c04_inspection_identity;
pub mod c05_last_inspection;
pub mod c07_pending_eviction;
pub mod c08_task_completion;
pub mod c09_high_priority;
pub mod c10_flood_event_close;
