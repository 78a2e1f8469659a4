use serde::{Deserialize, Serialize};

use crate::ids::{AssetId, BlockHeight, EventId, InspectionId, Principal, TaskId};

/// Well-known asset status labels.
///
/// Status is caller-supplied text; these are conventions, not a closed set.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const MAINTENANCE: &str = "maintenance";
    pub const INACTIVE: &str = "inactive";
    pub const DECOMMISSIONED: &str = "decommissioned";
}

/// A registered physical asset (dam, levee, pump, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Category label, e.g. `"dam"`.
    pub asset_type: String,
    pub location: String,
    /// Calendar-encoded date, e.g. `20100101`.
    pub construction_date: u32,
    pub capacity: u64,
    pub status: String,
    /// Clock value at the most recent mutation.
    pub last_updated: BlockHeight,
}

/// A point-in-time inspection of an asset. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: InspectionId,
    pub asset_id: AssetId,
    pub inspector: Principal,
    pub date: BlockHeight,
    pub rating: u32,
    pub notes: String,
    pub next_inspection_due: BlockHeight,
}

/// A maintenance task scheduled against an asset.
///
/// Created pending; transitions to completed via task completion only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: TaskId,
    pub asset_id: AssetId,
    pub description: String,
    pub priority: u32,
    pub scheduled_date: BlockHeight,
    pub completed: bool,
    pub assigned_to: Principal,
    pub created_by: Principal,
    pub created_at: BlockHeight,
    /// None while the task is pending.
    pub completed_at: Option<BlockHeight>,
}

/// A flood event. Created active, closed once by setting `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloodEvent {
    pub id: EventId,
    pub start_date: BlockHeight,
    pub end_date: Option<BlockHeight>,
    pub severity: u32,
    pub affected_area: String,
    pub active: bool,
}

/// Composite key of an asset performance observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObservationKey {
    pub event_id: EventId,
    pub asset_id: AssetId,
}

impl ObservationKey {
    pub fn new(event_id: EventId, asset_id: AssetId) -> Self {
        ObservationKey { event_id, asset_id }
    }
}

/// How an asset performed during a flood event. At most one per
/// [`ObservationKey`]; later writes replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceObservation {
    pub effectiveness_rating: u32,
    pub issues_reported: String,
    pub water_level_max: u64,
    pub operational_status: String,
}
