//! C10: Flood event closure.
//!
//! A registered event is active with no end date. Closing it MUST set the
//! end date to the current block height and remove it from the active
//! list. Closing an unknown event MUST answer 404.

use crate::fixtures::{self, ctx};
use crate::traits::TestableLedger;

/// C10: closed events leave the active list; unknown ids are 404.
pub async fn test_c10_flood_event_close<L: TestableLedger>(ledger: &L) -> Result<(), String> {
    let storm = fixtures::expect_id(
        ledger,
        &ctx(40),
        fixtures::register_flood_event(5, "Lower Basin"),
        "C10",
    )
    .await?;
    let surge = fixtures::expect_id(
        ledger,
        &ctx(41),
        fixtures::register_flood_event(3, "Coastal Flats"),
        "C10",
    )
    .await?;
    if (storm, surge) != (1, 2) {
        return Err(format!(
            "C10: events received ids {} and {}, expected 1 and 2",
            storm, surge
        ));
    }

    let event = fixtures::expect_ok(ledger, &ctx(42), fixtures::get_flood_event(storm), "C10").await?;
    if event["active"] != true || !event["end_date"].is_null() || event["start_date"].as_u64() != Some(40)
    {
        return Err(format!("C10: new event reads {}", event));
    }

    fixtures::expect_ok(ledger, &ctx(50), fixtures::close_flood_event(storm), "C10").await?;
    let event = fixtures::expect_ok(ledger, &ctx(51), fixtures::get_flood_event(storm), "C10").await?;
    if event["active"] != false || event["end_date"].as_u64() != Some(50) {
        return Err(format!("C10: closed event reads {}, expected end_date 50", event));
    }

    let active =
        fixtures::expect_ok(ledger, &ctx(51), fixtures::get_active_flood_events(), "C10").await?;
    let ids = fixtures::record_ids(&active, "C10")?;
    if ids != vec![surge] {
        return Err(format!(
            "C10: active events are {:?}, expected only {}",
            ids, surge
        ));
    }

    fixtures::expect_not_found(ledger, &ctx(52), fixtures::close_flood_event(77), "C10").await?;
    Ok(())
}
