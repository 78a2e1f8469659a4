//! C7: Bounded pending index.
//!
//! The pending index of an asset holds at most 10 task ids. Creating an
//! 11th task MUST evict the oldest id, keep the remaining ten in creation
//! order, and MUST NOT delete the evicted task's record.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

/// C7: eleven tasks leave ids 2..=11 in the index.
pub async fn test_c07_pending_eviction<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    let mut created = Vec::new();
    for n in 0..11u64 {
        let id = fixtures::expect_id(
            ledger,
            &ctx(10 + n),
            fixtures::create_maintenance_task(1, &format!("task {}", n + 1), 3),
            "C7",
        )
        .await?;
        created.push(id);
    }

    let pending =
        fixtures::expect_ok(ledger, &ctx(30), fixtures::get_asset_pending_tasks(1), "C7").await?;
    let pending = fixtures::id_list(&pending, "C7")?;
    if pending.len() != 10 {
        return Err(format!(
            "C7: pending index holds {} entries, expected 10",
            pending.len()
        ));
    }
    if pending != created[1..] {
        return Err(format!(
            "C7: pending index is {:?}, expected {:?} (oldest evicted, order kept)",
            pending,
            &created[1..]
        ));
    }

    let evicted =
        fixtures::expect_ok(ledger, &ctx(30), fixtures::get_maintenance_task(created[0]), "C7")
            .await?;
    if evicted.is_null() {
        return Err("C7: eviction from the index deleted the task record".to_string());
    }
    if evicted["completed"] != false {
        return Err(format!("C7: evicted task changed state: {}", evicted));
    }
    Ok(())
}
