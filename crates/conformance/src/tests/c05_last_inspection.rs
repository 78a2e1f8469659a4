//! C5: Last inspection per asset.
//!
//! `get-asset-last-inspection(a)` MUST return the most recently created
//! inspection of `a`, even after inspections of other assets.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

/// C5: the per-asset pointer follows the newest inspection of that asset.
pub async fn test_c05_last_inspection<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    fixtures::expect_ok(
        ledger,
        &ctx(1),
        fixtures::record_inspection(1, 3, "baseline", 100),
        "C5",
    )
    .await?;
    let latest = fixtures::expect_id(
        ledger,
        &ctx(2),
        fixtures::record_inspection(1, 5, "after repairs", 300),
        "C5",
    )
    .await?;
    let other = fixtures::expect_id(
        ledger,
        &ctx(3),
        fixtures::record_inspection(2, 1, "gate jammed", 120),
        "C5",
    )
    .await?;

    let last = fixtures::expect_ok(ledger, &ctx(4), fixtures::get_asset_last_inspection(1), "C5")
        .await?;
    if last["id"].as_u64() != Some(latest) || last["notes"] != "after repairs" {
        return Err(format!(
            "C5: asset 1 last inspection is {}, expected inspection {}",
            last, latest
        ));
    }

    let last = fixtures::expect_ok(ledger, &ctx(4), fixtures::get_asset_last_inspection(2), "C5")
        .await?;
    if last["id"].as_u64() != Some(other) {
        return Err(format!(
            "C5: asset 2 last inspection is {}, expected inspection {}",
            last, other
        ));
    }

    let none = fixtures::expect_ok(ledger, &ctx(4), fixtures::get_asset_last_inspection(3), "C5")
        .await?;
    if !none.is_null() {
        return Err(format!("C5: uninspected asset 3 reports {}", none));
    }
    Ok(())
}
