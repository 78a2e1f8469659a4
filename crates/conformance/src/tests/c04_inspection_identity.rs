//! C4: Inspection identifiers and inspector identity.
//!
//! Inspection ids come from ONE counter shared by all assets: two
//! inspections of different assets created back to back MUST receive
//! consecutive ids. The inspector and date MUST be the caller and block
//! height of the recording call.

use crate::fixtures::{self, ctx, ctx_as, INSPECTOR};
use crate::traits::TestableLedger;

/// C4: consecutive ids across assets; caller recorded as inspector.
pub async fn test_c04_inspection_identity<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    fixtures::expect_id(ledger, &ctx(1), fixtures::register_dam(), "C4").await?;
    fixtures::expect_id(ledger, &ctx(1), fixtures::register_dam(), "C4").await?;

    let first = fixtures::expect_id(
        ledger,
        &ctx_as(30, INSPECTOR),
        fixtures::record_inspection(1, 4, "spillway clear", 200),
        "C4",
    )
    .await?;
    let second = fixtures::expect_id(
        ledger,
        &ctx(31),
        fixtures::record_inspection(2, 2, "erosion on toe", 150),
        "C4",
    )
    .await?;
    if (first, second) != (1, 2) {
        return Err(format!(
            "C4: inspections of different assets received ids {} and {}, expected 1 and 2",
            first, second
        ));
    }

    let record = fixtures::expect_ok(ledger, &ctx(32), fixtures::get_inspection(first), "C4").await?;
    if record["inspector"] != INSPECTOR {
        return Err(format!(
            "C4: inspector recorded as {}, expected the calling identity {}",
            record["inspector"], INSPECTOR
        ));
    }
    if record["date"].as_u64() != Some(30) {
        return Err(format!("C4: inspection date is {}, expected 30", record["date"]));
    }
    if record["asset_id"].as_u64() != Some(1) || record["next_inspection_due"].as_u64() != Some(200)
    {
        return Err(format!("C4: inspection stored as {}", record));
    }
    Ok(())
}
