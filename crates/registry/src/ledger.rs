//! The four registries composed behind one owner.
//!
//! Registries hold disjoint state and never call one another; the ledger
//! only routes calls and exports or restores their state together.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use floodline_storage::StateError;

use crate::asset::{AssetRegistry, AssetRegistryState};
use crate::config::LedgerConfig;
use crate::inspection::{InspectionRegistry, InspectionRegistryState};
use crate::maintenance::{MaintenanceRegistry, MaintenanceRegistryState};
use crate::performance::{PerformanceRegistry, PerformanceRegistryState};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
    assets: AssetRegistry,
    inspections: InspectionRegistry,
    maintenance: MaintenanceRegistry,
    performance: PerformanceRegistry,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        Ledger {
            maintenance: MaintenanceRegistry::new(config.maintenance.clone()),
            config,
            assets: AssetRegistry::new(),
            inspections: InspectionRegistry::new(),
            performance: PerformanceRegistry::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    pub fn inspections(&self) -> &InspectionRegistry {
        &self.inspections
    }

    pub fn inspections_mut(&mut self) -> &mut InspectionRegistry {
        &mut self.inspections
    }

    pub fn maintenance(&self) -> &MaintenanceRegistry {
        &self.maintenance
    }

    pub fn maintenance_mut(&mut self) -> &mut MaintenanceRegistry {
        &mut self.maintenance
    }

    pub fn performance(&self) -> &PerformanceRegistry {
        &self.performance
    }

    pub fn performance_mut(&mut self) -> &mut PerformanceRegistry {
        &mut self.performance
    }

    /// Snapshot of every registry's counter, records and derived indexes.
    pub fn export_state(&self) -> LedgerState {
        LedgerState {
            assets: self.assets.export(),
            inspections: self.inspections.export(),
            maintenance: self.maintenance.export(),
            performance: self.performance.export(),
        }
    }

    /// Rebuild a ledger from exported state.
    pub fn from_state(config: LedgerConfig, state: LedgerState) -> Result<Self, StateError> {
        config
            .validate()
            .map_err(|e| StateError::Inconsistent(e.to_string()))?;
        Ok(Ledger {
            assets: AssetRegistry::restore(state.assets)?,
            inspections: InspectionRegistry::restore(state.inspections)?,
            maintenance: MaintenanceRegistry::restore(
                config.maintenance.clone(),
                state.maintenance,
            )?,
            performance: PerformanceRegistry::restore(state.performance)?,
            config,
        })
    }
}

/// Serializable state of a whole [`Ledger`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub assets: AssetRegistryState,
    pub inspections: InspectionRegistryState,
    pub maintenance: MaintenanceRegistryState,
    pub performance: PerformanceRegistryState,
}

impl LedgerState {
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Lowercase hex SHA-256 of the compact JSON encoding.
    ///
    /// Records are exported in id order and maps are ordered, so equal
    /// states always produce equal digests.
    pub fn digest(&self) -> Result<String, StateError> {
        let bytes = serde_json::to_vec(self)?;
        let hash = Sha256::digest(&bytes);
        Ok(hash.iter().map(|b| format!("{:02x}", b)).collect())
    }
}
