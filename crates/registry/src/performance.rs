//! Performance registry: flood events and per-event asset observations.

use std::collections::BTreeMap;

use floodline_storage::{
    AssetId, CallContext, EventId, FloodEvent, IdTable, LedgerError, ObservationKey,
    PerformanceObservation, RecordKind, StateError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct PerformanceRegistry {
    events: IdTable<EventId, FloodEvent>,
    observations: BTreeMap<ObservationKey, PerformanceObservation>,
}

/// One stored observation in exported state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationEntry {
    pub event_id: EventId,
    pub asset_id: AssetId,
    pub observation: PerformanceObservation,
}

/// Exported form of a [`PerformanceRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRegistryState {
    pub last_event_id: u64,
    pub events: Vec<FloodEvent>,
    pub observations: Vec<ObservationEntry>,
}

impl PerformanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new active flood event starting at the current clock.
    pub fn register_flood_event(
        &mut self,
        ctx: &CallContext,
        severity: u32,
        affected_area: &str,
    ) -> EventId {
        let id = self.events.insert_next(|id| FloodEvent {
            id,
            start_date: ctx.block_height,
            end_date: None,
            severity,
            affected_area: affected_area.to_string(),
            active: true,
        });
        debug!(
            event_id = %id,
            severity,
            block_height = %ctx.block_height,
            "flood event registered"
        );
        id
    }

    /// Close an event at the current clock.
    ///
    /// Closing an already closed event succeeds and moves `end_date`.
    pub fn close_flood_event(
        &mut self,
        ctx: &CallContext,
        event_id: EventId,
    ) -> Result<(), LedgerError> {
        let Some(event) = self.events.get_mut(event_id) else {
            debug!(event_id = %event_id, "close of unknown flood event");
            return Err(LedgerError::not_found(RecordKind::FloodEvent, event_id));
        };
        event.end_date = Some(ctx.block_height);
        event.active = false;
        info!(
            event_id = %event_id,
            block_height = %ctx.block_height,
            "flood event closed"
        );
        Ok(())
    }

    /// Store the observation for `(event_id, asset_id)`, replacing any
    /// earlier one. Neither id is checked.
    pub fn record_asset_performance(
        &mut self,
        ctx: &CallContext,
        event_id: EventId,
        asset_id: AssetId,
        observation: PerformanceObservation,
    ) {
        let replaced = self
            .observations
            .insert(ObservationKey::new(event_id, asset_id), observation)
            .is_some();
        debug!(
            event_id = %event_id,
            asset_id = %asset_id,
            replaced,
            sender = %ctx.sender,
            "asset performance recorded"
        );
    }

    pub fn get_flood_event(&self, event_id: EventId) -> Option<&FloodEvent> {
        self.events.get(event_id)
    }

    /// All events still active. Order is not part of the contract.
    pub fn get_active_flood_events(&self) -> Vec<&FloodEvent> {
        self.events.values().filter(|e| e.active).collect()
    }

    pub fn get_asset_performance(
        &self,
        event_id: EventId,
        asset_id: AssetId,
    ) -> Option<&PerformanceObservation> {
        self.observations
            .get(&ObservationKey::new(event_id, asset_id))
    }

    pub fn last_event_id(&self) -> u64 {
        self.events.last_id()
    }

    pub(crate) fn export(&self) -> PerformanceRegistryState {
        PerformanceRegistryState {
            last_event_id: self.events.last_id(),
            events: self.events.values().cloned().collect(),
            observations: self
                .observations
                .iter()
                .map(|(key, observation)| ObservationEntry {
                    event_id: key.event_id,
                    asset_id: key.asset_id,
                    observation: observation.clone(),
                })
                .collect(),
        }
    }

    pub(crate) fn restore(state: PerformanceRegistryState) -> Result<Self, StateError> {
        let events = IdTable::from_records(state.last_event_id, state.events, |e| e.id)?;
        let mut observations = BTreeMap::new();
        for entry in state.observations {
            let key = ObservationKey::new(entry.event_id, entry.asset_id);
            if observations.insert(key, entry.observation).is_some() {
                return Err(StateError::Inconsistent(format!(
                    "duplicate observation for event {} asset {}",
                    entry.event_id, entry.asset_id
                )));
            }
        }
        Ok(PerformanceRegistry {
            events,
            observations,
        })
    }
}
