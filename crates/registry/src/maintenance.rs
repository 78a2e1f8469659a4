//! Maintenance registry.
//!
//! Tasks are created pending and completed at most once in effect (a repeat
//! completion rewrites `completed_at`). Each asset has a bounded index of
//! its most recently created pending task ids:
//!
//! - creating a task appends its id, evicting the oldest entry once the
//!   index holds `pending_task_limit` ids;
//! - completing a task removes its id wherever it sits.
//!
//! The index is the only source of truth for "pending" lookups. An evicted
//! task keeps its record and can still be completed.

use std::collections::{BTreeMap, BTreeSet};

use floodline_storage::{
    AssetId, BlockHeight, BoundedIndex, CallContext, IdTable, LedgerError, MaintenanceTask,
    Principal, RecordKind, StateError, TaskId,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MaintenanceConfig;

/// Input of [`MaintenanceRegistry::create_maintenance_task`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceTask {
    pub asset_id: AssetId,
    pub description: String,
    pub priority: u32,
    pub scheduled_date: BlockHeight,
    pub assigned_to: Principal,
}

#[derive(Debug, Clone)]
pub struct MaintenanceRegistry {
    tasks: IdTable<TaskId, MaintenanceTask>,
    pending: BTreeMap<AssetId, BoundedIndex<TaskId>>,
    config: MaintenanceConfig,
}

/// Exported form of a [`MaintenanceRegistry`]. Pending lists are oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRegistryState {
    pub last_task_id: u64,
    pub tasks: Vec<MaintenanceTask>,
    pub pending_tasks: BTreeMap<AssetId, Vec<TaskId>>,
}

impl Default for MaintenanceRegistry {
    fn default() -> Self {
        Self::new(MaintenanceConfig::default())
    }
}

impl MaintenanceRegistry {
    pub fn new(config: MaintenanceConfig) -> Self {
        MaintenanceRegistry {
            tasks: IdTable::new(),
            pending: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &MaintenanceConfig {
        &self.config
    }

    /// Create a pending task and add it to its asset's pending index.
    pub fn create_maintenance_task(
        &mut self,
        ctx: &CallContext,
        new: NewMaintenanceTask,
    ) -> TaskId {
        let asset_id = new.asset_id;
        let id = self.tasks.insert_next(|id| MaintenanceTask {
            id,
            asset_id,
            description: new.description,
            priority: new.priority,
            scheduled_date: new.scheduled_date,
            completed: false,
            assigned_to: new.assigned_to,
            created_by: ctx.sender.clone(),
            created_at: ctx.block_height,
            completed_at: None,
        });

        let limit = self.config.pending_task_limit;
        let index = self
            .pending
            .entry(asset_id)
            .or_insert_with(|| BoundedIndex::new(limit));
        if let Some(evicted) = index.push(id) {
            debug!(
                asset_id = %asset_id,
                task_id = %evicted,
                "pending index full, oldest task evicted"
            );
        }

        debug!(
            task_id = %id,
            asset_id = %asset_id,
            created_by = %ctx.sender,
            block_height = %ctx.block_height,
            "maintenance task created"
        );
        id
    }

    /// Mark a task completed at the current clock and drop it from its
    /// asset's pending index.
    ///
    /// Completing an already completed task succeeds again and rewrites
    /// `completed_at`.
    pub fn complete_maintenance_task(
        &mut self,
        ctx: &CallContext,
        task_id: TaskId,
    ) -> Result<(), LedgerError> {
        let Some(task) = self.tasks.get_mut(task_id) else {
            debug!(task_id = %task_id, "completion of unknown task");
            return Err(LedgerError::not_found(RecordKind::MaintenanceTask, task_id));
        };
        task.completed = true;
        task.completed_at = Some(ctx.block_height);
        let asset_id = task.asset_id;

        if let Some(index) = self.pending.get_mut(&asset_id) {
            index.remove(&task_id);
        }
        info!(
            task_id = %task_id,
            asset_id = %asset_id,
            block_height = %ctx.block_height,
            "maintenance task completed"
        );
        Ok(())
    }

    pub fn get_maintenance_task(&self, task_id: TaskId) -> Option<&MaintenanceTask> {
        self.tasks.get(task_id)
    }

    /// The asset's pending index, oldest first. Empty for unknown assets.
    pub fn get_asset_pending_tasks(&self, asset_id: AssetId) -> Vec<TaskId> {
        self.pending
            .get(&asset_id)
            .map(BoundedIndex::to_vec)
            .unwrap_or_default()
    }

    /// Every uncompleted task at or above the high priority threshold.
    ///
    /// Full scan; order is not part of the contract.
    pub fn get_high_priority_tasks(&self) -> Vec<&MaintenanceTask> {
        let threshold = self.config.high_priority_threshold;
        self.tasks
            .values()
            .filter(|t| t.priority >= threshold && !t.completed)
            .collect()
    }

    pub fn last_task_id(&self) -> u64 {
        self.tasks.last_id()
    }

    pub(crate) fn export(&self) -> MaintenanceRegistryState {
        MaintenanceRegistryState {
            last_task_id: self.tasks.last_id(),
            tasks: self.tasks.values().cloned().collect(),
            pending_tasks: self
                .pending
                .iter()
                .map(|(asset_id, index)| (*asset_id, index.to_vec()))
                .collect(),
        }
    }

    /// Rebuild from exported state. Lists longer than the configured limit
    /// keep their most recent entries.
    ///
    /// Every pending entry must name an uncompleted task of that same asset,
    /// and no task may be listed twice.
    pub(crate) fn restore(
        config: MaintenanceConfig,
        state: MaintenanceRegistryState,
    ) -> Result<Self, StateError> {
        let tasks = IdTable::from_records(state.last_task_id, state.tasks, |t| t.id)?;
        let mut pending = BTreeMap::new();
        let mut listed = BTreeSet::new();
        for (asset_id, ids) in state.pending_tasks {
            let mut index = BoundedIndex::new(config.pending_task_limit);
            for task_id in ids {
                let problem = match tasks.get(task_id) {
                    None => Some("names unknown task"),
                    Some(task) if task.asset_id != asset_id => Some("names foreign task"),
                    Some(task) if task.completed => Some("names completed task"),
                    Some(_) if !listed.insert(task_id) => Some("repeats task"),
                    Some(_) => None,
                };
                if let Some(problem) = problem {
                    return Err(StateError::Inconsistent(format!(
                        "pending index of asset {} {} {}",
                        asset_id, problem, task_id
                    )));
                }
                index.push(task_id);
            }
            pending.insert(asset_id, index);
        }
        Ok(MaintenanceRegistry {
            tasks,
            pending,
            config,
        })
    }
}
