//! C9: High priority tasks.
//!
//! `get-high-priority-tasks` MUST return every task with priority at or
//! above 8 that is not completed, across all assets, including tasks
//! evicted from a pending index. Order is not checked.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

/// C9: threshold is inclusive and completed tasks drop out.
pub async fn test_c09_high_priority<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    let low = fixtures::expect_id(
        ledger,
        &ctx(1),
        fixtures::create_maintenance_task(1, "repaint railings", 7),
        "C9",
    )
    .await?;
    let boundary = fixtures::expect_id(
        ledger,
        &ctx(2),
        fixtures::create_maintenance_task(1, "seal joint", 8),
        "C9",
    )
    .await?;
    let urgent = fixtures::expect_id(
        ledger,
        &ctx(3),
        fixtures::create_maintenance_task(2, "replace pump seal", 10),
        "C9",
    )
    .await?;
    let done = fixtures::expect_id(
        ledger,
        &ctx(4),
        fixtures::create_maintenance_task(2, "clear trash rack", 9),
        "C9",
    )
    .await?;
    fixtures::expect_ok(ledger, &ctx(5), fixtures::complete_maintenance_task(done), "C9").await?;

    let high = fixtures::expect_ok(ledger, &ctx(6), fixtures::get_high_priority_tasks(), "C9").await?;
    let ids = fixtures::record_ids(&high, "C9")?;
    if ids != vec![boundary, urgent] {
        return Err(format!(
            "C9: high priority tasks are {:?}, expected {:?} (low {} and completed {} excluded)",
            ids,
            [boundary, urgent],
            low,
            done
        ));
    }
    Ok(())
}
