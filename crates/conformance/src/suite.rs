//! The `ledger_conformance_tests!` macro.
//!
//! Generates one `#[tokio::test]` function per ledger obligation C1 through
//! C12 for any type that implements `TestableLedger`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use floodline_conformance::ledger_conformance_tests;
//!
//! struct MyLedger { /* ... */ }
//!
//! impl MyLedger {
//!     fn new() -> Self { MyLedger {} }
//! }
//!
//! // Implement TestableLedger for MyLedger ...
//!
//! ledger_conformance_tests!(MyLedger::new());
//! ```
//!
//! Each generated test is named `conformance_cNN_<description>`; run the
//! suite with `cargo test conformance_`.

/// Generate conformance tests for a ledger host.
///
/// `$ledger_expr` is evaluated fresh for each test, so every check starts
/// from an empty ledger and the checks can run in any order.
#[macro_export]
macro_rules! ledger_conformance_tests {
    ($ledger_expr:expr) => {
        #[tokio::test]
        async fn conformance_c01_asset_sequencing() {
            let ledger = $ledger_expr;
            $crate::tests::c01_asset_sequencing::test_c01_asset_sequencing(&ledger)
                .await
                .expect("C1: asset sequencing conformance failed");
        }

        #[tokio::test]
        async fn conformance_c02_status_not_found() {
            let ledger = $ledger_expr;
            $crate::tests::c02_status_not_found::test_c02_status_not_found(&ledger)
                .await
                .expect("C2: status not found conformance failed");
        }

        #[tokio::test]
        async fn conformance_c03_status_update() {
            let ledger = $ledger_expr;
            $crate::tests::c03_status_update::test_c03_status_update(&ledger)
                .await
                .expect("C3: status update conformance failed");
        }

        #[tokio::test]
        async fn conformance_c04_inspection_identity() {
            let ledger = $ledger_expr;
            $crate::tests::c04_inspection_identity::test_c04_inspection_identity(&ledger)
                .await
                .expect("C4: inspection identity conformance failed");
        }

        #[tokio::test]
        async fn conformance_c05_last_inspection() {
            let ledger = $ledger_expr;
            $crate::tests::c05_last_inspection::test_c05_last_inspection(&ledger)
                .await
                .expect("C5: last inspection conformance failed");
        }

        #[tokio::test]
        async fn conformance_c06_due_inspections() {
            let ledger = $ledger_expr;
            $crate::tests::c06_due_inspections::test_c06_due_inspections(&ledger)
                .await
                .expect("C6: due inspections conformance failed");
        }

        #[tokio::test]
        async fn conformance_c07_pending_eviction() {
            let ledger = $ledger_expr;
            $crate::tests::c07_pending_eviction::test_c07_pending_eviction(&ledger)
                .await
                .expect("C7: pending eviction conformance failed");
        }

        #[tokio::test]
        async fn conformance_c08_task_completion() {
            let ledger = $ledger_expr;
            $crate::tests::c08_task_completion::test_c08_task_completion(&ledger)
                .await
                .expect("C8: task completion conformance failed");
        }

        #[tokio::test]
        async fn conformance_c09_high_priority() {
            let ledger = $ledger_expr;
            $crate::tests::c09_high_priority::test_c09_high_priority(&ledger)
                .await
                .expect("C9: high priority conformance failed");
        }

        #[tokio::test]
        async fn conformance_c10_flood_event_close() {
            let ledger = $ledger_expr;
            $crate::tests::c10_flood_event_close::test_c10_flood_event_close(&ledger)
                .await
                .expect("C10: flood event close conformance failed");
        }

        #[tokio::test]
        async fn conformance_c11_performance_upsert() {
            let ledger = $ledger_expr;
            $crate::tests::c11_performance_upsert::test_c11_performance_upsert(&ledger)
                .await
                .expect("C11: performance upsert conformance failed");
        }

        #[tokio::test]
        async fn conformance_c12_absent_reads() {
            let ledger = $ledger_expr;
            $crate::tests::c12_absent_reads::test_c12_absent_reads(&ledger)
                .await
                .expect("C12: absent reads conformance failed");
        }
    };
}
