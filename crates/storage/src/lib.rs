//! floodline-storage: the building blocks shared by every Floodline registry.
//!
//! Each registry owns its own state partition built from two primitives:
//!
//! - [`IdTable`]: a monotonic identifier counter plus an owned mapping from
//!   identifier to record.
//! - [`BoundedIndex`]: a capped FIFO used for derived indexes such as the
//!   per-asset pending task list.
//!
//! The logical clock and caller identity are never read from ambient state;
//! they arrive with every mutating call as a [`CallContext`].

mod error;
mod ids;
mod index;
mod record;
mod table;

pub use error::{LedgerError, RecordKind, StateError, NOT_FOUND_CODE};
pub use ids::{AssetId, BlockHeight, CallContext, EventId, InspectionId, Principal, RecordId, TaskId};
pub use index::BoundedIndex;
pub use record::{
    status, Asset, FloodEvent, Inspection, MaintenanceTask, ObservationKey,
    PerformanceObservation,
};
pub use table::IdTable;
