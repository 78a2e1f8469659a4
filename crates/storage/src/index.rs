use std::collections::VecDeque;

/// A FIFO of at most `capacity` entries.
///
/// Pushing onto a full index evicts the oldest entry. Eviction only drops
/// the entry from the index; whatever it refers to is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedIndex<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T: PartialEq> BoundedIndex<T> {
    /// Create an empty index. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        BoundedIndex {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append `value` as the newest entry, returning the entry evicted to
    /// stay within capacity, if any.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.entries.push_back(value);
        if self.entries.len() > self.capacity {
            self.pop_oldest()
        } else {
            None
        }
    }

    /// Remove and return the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Remove `value` wherever it sits. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.entries.iter().position(|e| e == value) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: PartialEq + Clone> BoundedIndex<T> {
    /// Entries oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
