//! Fixtures for the ledger conformance suite.
//!
//! Call builders for every registry function, the identities used as
//! callers, and helpers that unwrap the `{success, value}` envelope into
//! the error strings the checks return.

use floodline_interchange::{Call, CallResponse, ContractName};
use floodline_storage::CallContext;
use serde_json::{json, Value};

use crate::traits::TestableLedger;

/// Default transaction sender.
pub const OPERATOR: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// A second caller, used where the recorded identity matters.
pub const INSPECTOR: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

pub fn ctx(block_height: u64) -> CallContext {
    CallContext::new(block_height, OPERATOR)
}

pub fn ctx_as(block_height: u64, sender: &str) -> CallContext {
    CallContext::new(block_height, sender)
}

// ── Asset registration ───────────────────────────────────────────────────────

pub fn register_asset(
    asset_type: &str,
    location: &str,
    construction_date: u32,
    capacity: u64,
) -> Call {
    Call::new(
        ContractName::AssetRegistration,
        "register-asset",
        vec![
            json!(asset_type),
            json!(location),
            json!(construction_date),
            json!(capacity),
        ],
    )
}

/// The dam used by most checks.
pub fn register_dam() -> Call {
    register_asset("dam", "River Valley", 20100101, 5_000_000)
}

pub fn update_asset_status(asset_id: u64, status: &str) -> Call {
    Call::new(
        ContractName::AssetRegistration,
        "update-asset-status",
        vec![json!(asset_id), json!(status)],
    )
}

pub fn get_asset(asset_id: u64) -> Call {
    Call::new(ContractName::AssetRegistration, "get-asset", vec![json!(asset_id)])
}

pub fn get_last_asset_id() -> Call {
    Call::new(ContractName::AssetRegistration, "get-last-asset-id", vec![])
}

// ── Inspection tracking ──────────────────────────────────────────────────────

pub fn record_inspection(asset_id: u64, rating: u32, notes: &str, next_due: u64) -> Call {
    Call::new(
        ContractName::InspectionTracking,
        "record-inspection",
        vec![json!(asset_id), json!(rating), json!(notes), json!(next_due)],
    )
}

pub fn get_inspection(inspection_id: u64) -> Call {
    Call::new(
        ContractName::InspectionTracking,
        "get-inspection",
        vec![json!(inspection_id)],
    )
}

pub fn get_asset_last_inspection(asset_id: u64) -> Call {
    Call::new(
        ContractName::InspectionTracking,
        "get-asset-last-inspection",
        vec![json!(asset_id)],
    )
}

pub fn get_due_inspections(current_block: u64) -> Call {
    Call::new(
        ContractName::InspectionTracking,
        "get-due-inspections",
        vec![json!(current_block)],
    )
}

// ── Maintenance scheduling ───────────────────────────────────────────────────

pub fn create_maintenance_task(asset_id: u64, description: &str, priority: u32) -> Call {
    Call::new(
        ContractName::MaintenanceScheduling,
        "create-maintenance-task",
        vec![
            json!(asset_id),
            json!(description),
            json!(priority),
            json!(1_000u64),
            json!(INSPECTOR),
        ],
    )
}

pub fn complete_maintenance_task(task_id: u64) -> Call {
    Call::new(
        ContractName::MaintenanceScheduling,
        "complete-maintenance-task",
        vec![json!(task_id)],
    )
}

pub fn get_maintenance_task(task_id: u64) -> Call {
    Call::new(
        ContractName::MaintenanceScheduling,
        "get-maintenance-task",
        vec![json!(task_id)],
    )
}

pub fn get_asset_pending_tasks(asset_id: u64) -> Call {
    Call::new(
        ContractName::MaintenanceScheduling,
        "get-asset-pending-tasks",
        vec![json!(asset_id)],
    )
}

pub fn get_high_priority_tasks() -> Call {
    Call::new(
        ContractName::MaintenanceScheduling,
        "get-high-priority-tasks",
        vec![],
    )
}

// ── Performance monitoring ───────────────────────────────────────────────────

pub fn register_flood_event(severity: u32, affected_area: &str) -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "register-flood-event",
        vec![json!(severity), json!(affected_area)],
    )
}

pub fn close_flood_event(event_id: u64) -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "close-flood-event",
        vec![json!(event_id)],
    )
}

pub fn record_asset_performance(
    event_id: u64,
    asset_id: u64,
    rating: u32,
    water_level_max: u64,
) -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "record-asset-performance",
        vec![
            json!(event_id),
            json!(asset_id),
            json!(rating),
            json!("none"),
            json!(water_level_max),
            json!("operational"),
        ],
    )
}

pub fn get_flood_event(event_id: u64) -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "get-flood-event",
        vec![json!(event_id)],
    )
}

pub fn get_active_flood_events() -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "get-active-flood-events",
        vec![],
    )
}

pub fn get_asset_performance(event_id: u64, asset_id: u64) -> Call {
    Call::new(
        ContractName::PerformanceMonitoring,
        "get-asset-performance",
        vec![json!(event_id), json!(asset_id)],
    )
}

// ── Envelope helpers ─────────────────────────────────────────────────────────

/// Execute `call` and return the raw response.
pub async fn send<L: TestableLedger>(
    ledger: &L,
    ctx: &CallContext,
    call: Call,
    label: &str,
) -> Result<CallResponse, String> {
    let function = call.function.clone();
    ledger
        .call(ctx, call)
        .await
        .map_err(|e| format!("{}: {} failed: {}", label, function, e))
}

/// Execute `call` and require `success: true`; returns the value (or
/// `null` when the response carries none).
pub async fn expect_ok<L: TestableLedger>(
    ledger: &L,
    ctx: &CallContext,
    call: Call,
    label: &str,
) -> Result<Value, String> {
    let function = call.function.clone();
    let response = send(ledger, ctx, call, label).await?;
    if !response.success {
        return Err(format!(
            "{}: {} returned failure (error {:?})",
            label, function, response.error
        ));
    }
    Ok(response.value.unwrap_or(Value::Null))
}

/// Execute a creation call and return the allocated identifier.
pub async fn expect_id<L: TestableLedger>(
    ledger: &L,
    ctx: &CallContext,
    call: Call,
    label: &str,
) -> Result<u64, String> {
    let function = call.function.clone();
    let value = expect_ok(ledger, ctx, call, label).await?;
    value
        .as_u64()
        .ok_or_else(|| format!("{}: {} returned non-integer id {}", label, function, value))
}

/// Execute `call` and require `{success: false, error: 404}`.
pub async fn expect_not_found<L: TestableLedger>(
    ledger: &L,
    ctx: &CallContext,
    call: Call,
    label: &str,
) -> Result<(), String> {
    let function = call.function.clone();
    let response = send(ledger, ctx, call, label).await?;
    if response.success || response.error != Some(404) {
        return Err(format!(
            "{}: {} expected {{success: false, error: 404}}, got success={} error={:?}",
            label, function, response.success, response.error
        ));
    }
    Ok(())
}

/// Read an array of integers (ids) from a response value.
pub fn id_list(value: &Value, label: &str) -> Result<Vec<u64>, String> {
    value
        .as_array()
        .ok_or_else(|| format!("{}: expected an array, got {}", label, value))?
        .iter()
        .map(|v| {
            v.as_u64()
                .ok_or_else(|| format!("{}: expected integer id, got {}", label, v))
        })
        .collect()
}

/// Read the `id` field of every record in an array response, sorted, since
/// list operations promise no order.
pub fn record_ids(value: &Value, label: &str) -> Result<Vec<u64>, String> {
    let mut ids = value
        .as_array()
        .ok_or_else(|| format!("{}: expected an array, got {}", label, value))?
        .iter()
        .map(|r| {
            r.get("id")
                .and_then(|id| id.as_u64())
                .ok_or_else(|| format!("{}: record without id: {}", label, r))
        })
        .collect::<Result<Vec<u64>, String>>()?;
    ids.sort_unstable();
    Ok(ids)
}
