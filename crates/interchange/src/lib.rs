//! floodline-interchange: the call surface shared by hosts and registries.
//!
//! A host hands the ledger a [`Call`] (contract name, function name,
//! positional JSON arguments) and gets back a [`CallResponse`] shaped as
//! `{"success": true, "value": ...}` or `{"success": false, "error": <code>}`.
//!
//! This crate knows nothing about registry state; it only defines the
//! envelopes and the positional argument decoding ([`Args`]) every
//! dispatcher needs.

pub mod deserialize;
pub mod types;

pub use deserialize::{parse_call, Args, InterchangeError};
pub use types::*;
