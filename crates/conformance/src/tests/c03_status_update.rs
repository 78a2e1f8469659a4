//! C3: Status update stamps the clock.
//!
//! After a successful `update-asset-status(id, s)` the asset's status MUST
//! be `s` and `last_updated` MUST be the block height of that call. Status
//! is open text; labels outside the well-known set are accepted.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

async fn check_status<L: TestableLedger>(
    ledger: &L,
    status: &str,
    height: u64,
) -> Result<(), String> {
    let response = fixtures::send(
        ledger,
        &ctx(height),
        fixtures::update_asset_status(1, status),
        "C3",
    )
    .await?;
    if !response.success || response.value.is_some() {
        return Err(format!(
            "C3: update to '{}' should answer {{success: true}} without value, got {:?}",
            status, response
        ));
    }

    let asset = fixtures::expect_ok(ledger, &ctx(height + 1), fixtures::get_asset(1), "C3").await?;
    if asset["status"] != status {
        return Err(format!("C3: status is {}, expected '{}'", asset["status"], status));
    }
    if asset["last_updated"].as_u64() != Some(height) {
        return Err(format!(
            "C3: last_updated is {}, expected {}",
            asset["last_updated"], height
        ));
    }
    Ok(())
}

/// C3: status and last_updated follow each update.
pub async fn test_c03_status_update<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    fixtures::expect_id(ledger, &ctx(1), fixtures::register_dam(), "C3").await?;
    check_status(ledger, "maintenance", 15).await?;
    check_status(ledger, "decommissioned", 40).await?;
    check_status(ledger, "under-review", 41).await
}
