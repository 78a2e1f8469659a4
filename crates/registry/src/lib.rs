//! Floodline registries: asset lifecycle state on a deterministic ledger.
//!
//! Four registries share one design (a monotonic counter, an owned record
//! map, and derived indexes) but never call one another:
//!
//! - [`AssetRegistry`]: assets and their status.
//! - [`InspectionRegistry`]: inspections and the last inspection per asset.
//! - [`MaintenanceRegistry`]: tasks and a bounded pending index per asset.
//! - [`PerformanceRegistry`]: flood events and per-event asset observations.
//!
//! Every mutating operation receives a [`CallContext`] carrying the logical
//! clock and the caller. The host serializes calls; each operation runs to
//! completion or fails without writing anything.
//!
//! [`Ledger`] composes the four and adds the JSON call interface
//! ([`Ledger::call`]) and state export ([`Ledger::export_state`]).
//!
//! [`CallContext`]: floodline_storage::CallContext

pub mod asset;
pub mod config;
mod dispatch;
pub mod inspection;
pub mod ledger;
pub mod maintenance;
pub mod performance;

pub use asset::{AssetRegistration, AssetRegistry, AssetRegistryState};
pub use config::{ConfigError, LedgerConfig, MaintenanceConfig};
pub use inspection::{InspectionRegistry, InspectionRegistryState, NewInspection};
pub use ledger::{Ledger, LedgerState};
pub use maintenance::{MaintenanceRegistry, MaintenanceRegistryState, NewMaintenanceTask};
pub use performance::{ObservationEntry, PerformanceRegistry, PerformanceRegistryState};
