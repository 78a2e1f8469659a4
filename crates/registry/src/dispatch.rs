//! Routing of interchange [`Call`]s to registry operations.
//!
//! Arguments are decoded in full before any registry is touched, so a call
//! rejected with an [`InterchangeError`] never changes state. `NotFound`
//! from an operation is a normal response: `{"success": false, "error": 404}`.

use floodline_interchange::{parse_call, Args, Call, CallResponse, ContractName, InterchangeError};
use floodline_storage::{
    AssetId, BlockHeight, CallContext, EventId, InspectionId, LedgerError,
    PerformanceObservation, Principal, TaskId,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::asset::{AssetRegistration, AssetRegistry};
use crate::inspection::{InspectionRegistry, NewInspection};
use crate::ledger::Ledger;
use crate::maintenance::{MaintenanceRegistry, NewMaintenanceTask};
use crate::performance::PerformanceRegistry;

impl Ledger {
    /// Execute one call against the current state.
    #[tracing::instrument(
        level = "debug",
        skip(self, ctx, call),
        fields(contract = %call.contract, function = %call.function)
    )]
    pub fn call(
        &mut self,
        ctx: &CallContext,
        call: &Call,
    ) -> Result<CallResponse, InterchangeError> {
        let response = match call.contract {
            ContractName::AssetRegistration => asset_registration(self.assets_mut(), ctx, call),
            ContractName::InspectionTracking => {
                inspection_tracking(self.inspections_mut(), ctx, call)
            }
            ContractName::MaintenanceScheduling => {
                maintenance_scheduling(self.maintenance_mut(), ctx, call)
            }
            ContractName::PerformanceMonitoring => {
                performance_monitoring(self.performance_mut(), ctx, call)
            }
        }?;
        debug!(success = response.success, "call finished");
        Ok(response)
    }

    /// Decode a JSON call envelope, execute it, and encode the response.
    pub fn call_json(
        &mut self,
        ctx: &CallContext,
        envelope: &Value,
    ) -> Result<Value, InterchangeError> {
        let call = parse_call(envelope)?;
        let response = self.call(ctx, &call)?;
        Ok(json!(response))
    }
}

fn asset_registration(
    registry: &mut AssetRegistry,
    ctx: &CallContext,
    call: &Call,
) -> Result<CallResponse, InterchangeError> {
    let args = Args::new(call);
    match call.function.as_str() {
        "register-asset" => {
            args.expect_len(4)?;
            let registration = AssetRegistration {
                asset_type: args.string(0)?,
                location: args.string(1)?,
                construction_date: args.u32(2)?,
                capacity: args.u64(3)?,
            };
            let id = registry.register_asset(ctx, registration);
            Ok(CallResponse::ok(id.0))
        }
        "update-asset-status" => {
            args.expect_len(2)?;
            let asset_id = AssetId(args.u64(0)?);
            let new_status = args.string(1)?;
            Ok(transition(registry.update_asset_status(
                ctx,
                asset_id,
                &new_status,
            )))
        }
        "get-asset" => {
            args.expect_len(1)?;
            Ok(read(registry.get_asset(AssetId(args.u64(0)?))))
        }
        "get-last-asset-id" => {
            args.expect_len(0)?;
            Ok(CallResponse::ok(registry.last_asset_id()))
        }
        _ => Err(unknown_function(call)),
    }
}

fn inspection_tracking(
    registry: &mut InspectionRegistry,
    ctx: &CallContext,
    call: &Call,
) -> Result<CallResponse, InterchangeError> {
    let args = Args::new(call);
    match call.function.as_str() {
        "record-inspection" => {
            args.expect_len(4)?;
            let new = NewInspection {
                asset_id: AssetId(args.u64(0)?),
                rating: args.u32(1)?,
                notes: args.string(2)?,
                next_inspection_due: BlockHeight(args.u64(3)?),
            };
            let id = registry.record_inspection(ctx, new);
            Ok(CallResponse::ok(id.0))
        }
        "get-inspection" => {
            args.expect_len(1)?;
            Ok(read(registry.get_inspection(InspectionId(args.u64(0)?))))
        }
        "get-asset-last-inspection" => {
            args.expect_len(1)?;
            Ok(read(
                registry.get_asset_last_inspection(AssetId(args.u64(0)?)),
            ))
        }
        "get-due-inspections" => {
            args.expect_len(1)?;
            let due = registry.get_due_inspections(BlockHeight(args.u64(0)?));
            Ok(CallResponse::ok(json!(due)))
        }
        _ => Err(unknown_function(call)),
    }
}

fn maintenance_scheduling(
    registry: &mut MaintenanceRegistry,
    ctx: &CallContext,
    call: &Call,
) -> Result<CallResponse, InterchangeError> {
    let args = Args::new(call);
    match call.function.as_str() {
        "create-maintenance-task" => {
            args.expect_len(5)?;
            let new = NewMaintenanceTask {
                asset_id: AssetId(args.u64(0)?),
                description: args.string(1)?,
                priority: args.u32(2)?,
                scheduled_date: BlockHeight(args.u64(3)?),
                assigned_to: Principal(args.string(4)?),
            };
            let id = registry.create_maintenance_task(ctx, new);
            Ok(CallResponse::ok(id.0))
        }
        "complete-maintenance-task" => {
            args.expect_len(1)?;
            let task_id = TaskId(args.u64(0)?);
            Ok(transition(registry.complete_maintenance_task(ctx, task_id)))
        }
        "get-maintenance-task" => {
            args.expect_len(1)?;
            Ok(read(registry.get_maintenance_task(TaskId(args.u64(0)?))))
        }
        "get-asset-pending-tasks" => {
            args.expect_len(1)?;
            let pending = registry.get_asset_pending_tasks(AssetId(args.u64(0)?));
            Ok(CallResponse::ok(json!(pending)))
        }
        "get-high-priority-tasks" => {
            args.expect_len(0)?;
            Ok(CallResponse::ok(json!(registry.get_high_priority_tasks())))
        }
        _ => Err(unknown_function(call)),
    }
}

fn performance_monitoring(
    registry: &mut PerformanceRegistry,
    ctx: &CallContext,
    call: &Call,
) -> Result<CallResponse, InterchangeError> {
    let args = Args::new(call);
    match call.function.as_str() {
        "register-flood-event" => {
            args.expect_len(2)?;
            let severity = args.u32(0)?;
            let affected_area = args.string(1)?;
            let id = registry.register_flood_event(ctx, severity, &affected_area);
            Ok(CallResponse::ok(id.0))
        }
        "close-flood-event" => {
            args.expect_len(1)?;
            let event_id = EventId(args.u64(0)?);
            Ok(transition(registry.close_flood_event(ctx, event_id)))
        }
        "record-asset-performance" => {
            args.expect_len(6)?;
            let event_id = EventId(args.u64(0)?);
            let asset_id = AssetId(args.u64(1)?);
            let observation = PerformanceObservation {
                effectiveness_rating: args.u32(2)?,
                issues_reported: args.string(3)?,
                water_level_max: args.u64(4)?,
                operational_status: args.string(5)?,
            };
            registry.record_asset_performance(ctx, event_id, asset_id, observation);
            Ok(CallResponse::ok_empty())
        }
        "get-flood-event" => {
            args.expect_len(1)?;
            Ok(read(registry.get_flood_event(EventId(args.u64(0)?))))
        }
        "get-active-flood-events" => {
            args.expect_len(0)?;
            Ok(CallResponse::ok(json!(registry.get_active_flood_events())))
        }
        "get-asset-performance" => {
            args.expect_len(2)?;
            let event_id = EventId(args.u64(0)?);
            let asset_id = AssetId(args.u64(1)?);
            Ok(read(registry.get_asset_performance(event_id, asset_id)))
        }
        _ => Err(unknown_function(call)),
    }
}

fn transition(result: Result<(), LedgerError>) -> CallResponse {
    match result {
        Ok(()) => CallResponse::ok_empty(),
        Err(e) => CallResponse::err(e.code()),
    }
}

/// Absent records are a successful read with a `null` value.
fn read<T: Serialize>(record: Option<&T>) -> CallResponse {
    CallResponse::ok(record.map_or(Value::Null, |r| json!(r)))
}

fn unknown_function(call: &Call) -> InterchangeError {
    InterchangeError::UnknownFunction {
        contract: call.contract,
        function: call.function.clone(),
    }
}
