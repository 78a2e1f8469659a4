use std::fmt;

/// Wire code reported for [`LedgerError::NotFound`].
pub const NOT_FOUND_CODE: u32 = 404;

/// The registry a missing record was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Asset,
    MaintenanceTask,
    FloodEvent,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Asset => "asset",
            RecordKind::MaintenanceTask => "maintenance task",
            RecordKind::FloodEvent => "flood event",
        };
        f.write_str(name)
    }
}

/// All errors a registry operation can return.
///
/// Reads of unknown identifiers are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The operation targeted a record identifier that was never allocated.
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },
}

impl LedgerError {
    pub fn not_found(kind: RecordKind, id: impl Into<u64>) -> Self {
        LedgerError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Numeric code surfaced in `{success: false, error: <code>}` responses.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::NotFound { .. } => NOT_FOUND_CODE,
        }
    }
}

/// Errors raised while rebuilding registries from exported state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The serialized state could not be decoded.
    #[error("ledger state could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded state violates a store invariant (e.g. a record id above
    /// the counter).
    #[error("ledger state is inconsistent: {0}")]
    Inconsistent(String),
}
