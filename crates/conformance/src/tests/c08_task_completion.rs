//! C8: Task completion.
//!
//! Completing a task MUST mark it completed at the current block height and
//! remove its id from the asset's pending index without evicting anything
//! else. Completing it again succeeds and moves `completed_at`. An unknown
//! task id MUST answer 404.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

/// C8: completion removes one id from the index and is repeatable.
pub async fn test_c08_task_completion<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    let mut created = Vec::new();
    for n in 0..3u64 {
        let id = fixtures::expect_id(
            ledger,
            &ctx(10 + n),
            fixtures::create_maintenance_task(4, "desilt intake", 5),
            "C8",
        )
        .await?;
        created.push(id);
    }

    fixtures::expect_ok(
        ledger,
        &ctx(20),
        fixtures::complete_maintenance_task(created[1]),
        "C8",
    )
    .await?;

    let task =
        fixtures::expect_ok(ledger, &ctx(21), fixtures::get_maintenance_task(created[1]), "C8")
            .await?;
    if task["completed"] != true || task["completed_at"].as_u64() != Some(20) {
        return Err(format!(
            "C8: completed task reads {}, expected completed at 20",
            task
        ));
    }

    let pending =
        fixtures::expect_ok(ledger, &ctx(21), fixtures::get_asset_pending_tasks(4), "C8").await?;
    let pending = fixtures::id_list(&pending, "C8")?;
    if pending != vec![created[0], created[2]] {
        return Err(format!(
            "C8: pending index is {:?} after completing {}, expected {:?}",
            pending,
            created[1],
            [created[0], created[2]]
        ));
    }

    fixtures::expect_ok(
        ledger,
        &ctx(25),
        fixtures::complete_maintenance_task(created[1]),
        "C8",
    )
    .await?;
    let task =
        fixtures::expect_ok(ledger, &ctx(26), fixtures::get_maintenance_task(created[1]), "C8")
            .await?;
    if task["completed_at"].as_u64() != Some(25) {
        return Err(format!(
            "C8: repeat completion left completed_at at {}, expected 25",
            task["completed_at"]
        ));
    }

    fixtures::expect_not_found(ledger, &ctx(27), fixtures::complete_maintenance_task(999), "C8")
        .await?;
    Ok(())
}
