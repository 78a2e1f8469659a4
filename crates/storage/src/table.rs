use std::collections::BTreeMap;

use crate::error::StateError;
use crate::ids::RecordId;

/// A monotonic identifier counter plus the records it has allocated.
///
/// Identifiers are handed out as 1, 2, 3, ... and never reused. Records are
/// never removed, so `last_id()` always equals the number of insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTable<K, R> {
    last_id: u64,
    records: BTreeMap<K, R>,
}

impl<K, R> Default for IdTable<K, R> {
    fn default() -> Self {
        IdTable {
            last_id: 0,
            records: BTreeMap::new(),
        }
    }
}

impl<K: RecordId, R> IdTable<K, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from a counter value and its records.
    ///
    /// Rejects records whose id is zero or above the counter, since the
    /// next allocation would collide with them.
    pub fn from_parts(last_id: u64, records: BTreeMap<K, R>) -> Result<Self, StateError> {
        if let Some(bad) = records
            .keys()
            .find(|k| k.raw() == 0 || k.raw() > last_id)
        {
            return Err(StateError::Inconsistent(format!(
                "record id {:?} outside allocated range 1..={}",
                bad, last_id
            )));
        }
        Ok(IdTable { last_id, records })
    }

    /// Rebuild a table from records that carry their own identifier.
    pub fn from_records(
        last_id: u64,
        records: impl IntoIterator<Item = R>,
        key: impl Fn(&R) -> K,
    ) -> Result<Self, StateError> {
        let mut map = BTreeMap::new();
        for record in records {
            let id = key(&record);
            if map.insert(id, record).is_some() {
                return Err(StateError::Inconsistent(format!(
                    "duplicate record id {:?}",
                    id
                )));
            }
        }
        Self::from_parts(last_id, map)
    }

    /// Allocate the next identifier, build the record for it, and store it.
    pub fn insert_next(&mut self, build: impl FnOnce(K) -> R) -> K {
        self.last_id += 1;
        let id = K::from_raw(self.last_id);
        self.records.insert(id, build(id));
        id
    }

    pub fn get(&self, id: K) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut R> {
        self.records.get_mut(&id)
    }

    pub fn contains(&self, id: K) -> bool {
        self.records.contains_key(&id)
    }

    /// Current counter value; 0 when nothing has been allocated.
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in identifier order.
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn records(&self) -> &BTreeMap<K, R> {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AssetId;

    #[test]
    fn allocates_from_one_in_order() {
        let mut t: IdTable<AssetId, &str> = IdTable::new();
        assert_eq!(t.last_id(), 0);
        assert_eq!(t.insert_next(|_| "dam"), AssetId(1));
        assert_eq!(t.insert_next(|_| "levee"), AssetId(2));
        assert_eq!(t.insert_next(|_| "pump"), AssetId(3));
        assert_eq!(t.last_id(), 3);
        assert_eq!(t.get(AssetId(2)), Some(&"levee"));
    }

    #[test]
    fn builder_receives_allocated_id() {
        let mut t: IdTable<AssetId, AssetId> = IdTable::new();
        t.insert_next(|id| id);
        let id = t.insert_next(|id| id);
        assert_eq!(t.get(id), Some(&AssetId(2)));
    }

    #[test]
    fn unknown_id_is_absent() {
        let t: IdTable<AssetId, u32> = IdTable::new();
        assert!(t.get(AssetId(1)).is_none());
        assert!(!t.contains(AssetId(0)));
    }

    #[test]
    fn from_parts_rejects_id_above_counter() {
        let mut records = BTreeMap::new();
        records.insert(AssetId(5), "dam");
        let err = IdTable::<AssetId, &str>::from_parts(4, records).unwrap_err();
        assert!(matches!(err, StateError::Inconsistent(_)));
    }

    #[test]
    fn from_records_rejects_duplicates() {
        let records = [(AssetId(1), "dam"), (AssetId(1), "levee")];
        let err = IdTable::<AssetId, (AssetId, &str)>::from_records(2, records, |r| r.0)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn from_parts_continues_counter() {
        let mut records = BTreeMap::new();
        records.insert(AssetId(2), "levee");
        let mut t = IdTable::<AssetId, &str>::from_parts(2, records).unwrap();
        assert_eq!(t.insert_next(|_| "pump"), AssetId(3));
    }
}
