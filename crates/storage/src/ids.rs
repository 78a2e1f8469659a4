use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical clock value supplied by the host (a ledger block height).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        BlockHeight(height)
    }
}

/// Identity of whoever invoked the current operation (the transaction sender).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Principal(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Principal(id.to_string())
    }
}

/// Read-only inputs the host supplies for the duration of one operation.
///
/// Both values are fixed for the whole call; registries never read the clock
/// or the caller from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub block_height: BlockHeight,
    pub sender: Principal,
}

impl CallContext {
    pub fn new(block_height: impl Into<BlockHeight>, sender: impl Into<Principal>) -> Self {
        CallContext {
            block_height: block_height.into(),
            sender: sender.into(),
        }
    }
}

/// A record identifier allocated from a per-registry monotonic counter.
///
/// Identifiers start at 1; the raw value 0 never names a record.
pub trait RecordId: Copy + Ord + fmt::Debug {
    fn from_raw(raw: u64) -> Self;
    fn raw(self) -> u64;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl RecordId for $name {
            fn from_raw(raw: u64) -> Self {
                $name(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of a registered asset.
    AssetId
);
record_id!(
    /// Identifier of an inspection; a single counter shared by all assets.
    InspectionId
);
record_id!(
    /// Identifier of a maintenance task.
    TaskId
);
record_id!(
    /// Identifier of a flood event.
    EventId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        assert_eq!(serde_json::to_value(AssetId(7)).unwrap(), serde_json::json!(7));
        assert_eq!(
            serde_json::to_value(BlockHeight(120)).unwrap(),
            serde_json::json!(120)
        );
    }

    #[test]
    fn ids_work_as_json_map_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(TaskId(3), "pump overhaul");
        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(text, r#"{"3":"pump overhaul"}"#);
        let back: std::collections::BTreeMap<TaskId, String> =
            serde_json::from_str(&text).unwrap();
        assert_eq!(back[&TaskId(3)], "pump overhaul");
    }

    #[test]
    fn context_captures_clock_and_sender() {
        let ctx = CallContext::new(42, "ST1INSPECTOR");
        assert_eq!(ctx.block_height, BlockHeight(42));
        assert_eq!(ctx.sender.as_str(), "ST1INSPECTOR");
    }
}
