//! Inspection registry: append-only inspection records plus a
//! "most recent inspection" pointer per asset.

use std::collections::BTreeMap;

use floodline_storage::{
    AssetId, BlockHeight, CallContext, IdTable, Inspection, InspectionId, StateError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input of [`InspectionRegistry::record_inspection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInspection {
    pub asset_id: AssetId,
    pub rating: u32,
    pub notes: String,
    pub next_inspection_due: BlockHeight,
}

#[derive(Debug, Clone, Default)]
pub struct InspectionRegistry {
    /// One counter shared across all assets.
    inspections: IdTable<InspectionId, Inspection>,
    last_by_asset: BTreeMap<AssetId, InspectionId>,
}

/// Exported form of an [`InspectionRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRegistryState {
    pub last_inspection_id: u64,
    pub inspections: Vec<Inspection>,
    pub last_inspection: BTreeMap<AssetId, InspectionId>,
}

impl InspectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inspection made by the caller at the current clock.
    ///
    /// The asset id is not checked against the asset registry.
    pub fn record_inspection(&mut self, ctx: &CallContext, new: NewInspection) -> InspectionId {
        let asset_id = new.asset_id;
        let id = self.inspections.insert_next(|id| Inspection {
            id,
            asset_id,
            inspector: ctx.sender.clone(),
            date: ctx.block_height,
            rating: new.rating,
            notes: new.notes,
            next_inspection_due: new.next_inspection_due,
        });
        self.last_by_asset.insert(asset_id, id);
        debug!(
            inspection_id = %id,
            asset_id = %asset_id,
            inspector = %ctx.sender,
            block_height = %ctx.block_height,
            "inspection recorded"
        );
        id
    }

    pub fn get_inspection(&self, inspection_id: InspectionId) -> Option<&Inspection> {
        self.inspections.get(inspection_id)
    }

    /// The most recently recorded inspection of `asset_id`.
    pub fn get_asset_last_inspection(&self, asset_id: AssetId) -> Option<&Inspection> {
        self.last_by_asset
            .get(&asset_id)
            .and_then(|id| self.inspections.get(*id))
    }

    /// Every inspection whose next due height is at or before `current`.
    ///
    /// Scans all inspections; meant for batch reporting. Callers must not
    /// rely on the order of the result.
    pub fn get_due_inspections(&self, current: BlockHeight) -> Vec<&Inspection> {
        self.inspections
            .values()
            .filter(|i| i.next_inspection_due <= current)
            .collect()
    }

    pub fn last_inspection_id(&self) -> u64 {
        self.inspections.last_id()
    }

    pub(crate) fn export(&self) -> InspectionRegistryState {
        InspectionRegistryState {
            last_inspection_id: self.inspections.last_id(),
            inspections: self.inspections.values().cloned().collect(),
            last_inspection: self.last_by_asset.clone(),
        }
    }

    /// Rebuild from exported state. Each asset's pointer must name its
    /// newest inspection, and every inspected asset must have one.
    pub(crate) fn restore(state: InspectionRegistryState) -> Result<Self, StateError> {
        let inspections =
            IdTable::from_records(state.last_inspection_id, state.inspections, |i| i.id)?;
        let mut newest = BTreeMap::new();
        for inspection in inspections.values() {
            newest.insert(inspection.asset_id, inspection.id);
        }
        for (asset_id, inspection_id) in &state.last_inspection {
            if newest.get(asset_id) != Some(inspection_id) {
                return Err(StateError::Inconsistent(format!(
                    "last inspection {} of asset {} is not its newest inspection",
                    inspection_id, asset_id
                )));
            }
        }
        if let Some(asset_id) = newest
            .keys()
            .find(|a| !state.last_inspection.contains_key(*a))
        {
            return Err(StateError::Inconsistent(format!(
                "asset {} has inspections but no last inspection",
                asset_id
            )));
        }
        Ok(InspectionRegistry {
            inspections,
            last_by_asset: state.last_inspection,
        })
    }
}
