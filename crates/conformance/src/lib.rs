//! Floodline ledger conformance test suite (C01-C12).
//!
//! Provides a `TestableLedger` trait and `ledger_conformance_tests!`
//! macro for validating any host that exposes the registry call interface.
//! Every obligation is checked through `Call`/`CallResponse` envelopes, so
//! the suite runs unchanged against an in-process ledger or a remote one.

pub mod fixtures;
pub mod suite;
pub mod tests;
pub mod traits;

pub use traits::*;
