//! Asset registry: the canonical set of assets and their status.
//!
//! Every other registry refers to assets by [`AssetId`], but none of them
//! consult this registry; the reference is a convention.

use floodline_storage::{
    status, Asset, AssetId, CallContext, IdTable, LedgerError, RecordKind, StateError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Input of [`AssetRegistry::register_asset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRegistration {
    pub asset_type: String,
    pub location: String,
    pub construction_date: u32,
    pub capacity: u64,
}

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: IdTable<AssetId, Asset>,
}

/// Exported form of an [`AssetRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRegistryState {
    pub last_asset_id: u64,
    pub assets: Vec<Asset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new asset with status `active`. Always succeeds.
    pub fn register_asset(
        &mut self,
        ctx: &CallContext,
        registration: AssetRegistration,
    ) -> AssetId {
        let id = self.assets.insert_next(|id| Asset {
            id,
            asset_type: registration.asset_type,
            location: registration.location,
            construction_date: registration.construction_date,
            capacity: registration.capacity,
            status: status::ACTIVE.to_string(),
            last_updated: ctx.block_height,
        });
        debug!(
            asset_id = %id,
            block_height = %ctx.block_height,
            sender = %ctx.sender,
            "asset registered"
        );
        id
    }

    /// Overwrite an asset's status and stamp it with the current clock.
    pub fn update_asset_status(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        new_status: &str,
    ) -> Result<(), LedgerError> {
        let Some(asset) = self.assets.get_mut(asset_id) else {
            debug!(asset_id = %asset_id, "status update for unknown asset");
            return Err(LedgerError::not_found(RecordKind::Asset, asset_id));
        };
        info!(
            asset_id = %asset_id,
            from = %asset.status,
            to = new_status,
            block_height = %ctx.block_height,
            "asset status changed"
        );
        asset.status = new_status.to_string();
        asset.last_updated = ctx.block_height;
        Ok(())
    }

    pub fn get_asset(&self, asset_id: AssetId) -> Option<&Asset> {
        self.assets.get(asset_id)
    }

    /// Current counter value; equals the number of registrations.
    pub fn last_asset_id(&self) -> u64 {
        self.assets.last_id()
    }

    pub(crate) fn export(&self) -> AssetRegistryState {
        AssetRegistryState {
            last_asset_id: self.assets.last_id(),
            assets: self.assets.values().cloned().collect(),
        }
    }

    pub(crate) fn restore(state: AssetRegistryState) -> Result<Self, StateError> {
        Ok(AssetRegistry {
            assets: IdTable::from_records(state.last_asset_id, state.assets, |a| a.id)?,
        })
    }
}
