// ============================================================================
// Validation Cache
// Bounded memo of validation outcomes with full-clear eviction
// ============================================================================

use super::validator::Validation;
use std::collections::HashMap;

/// Memo of validation outcomes keyed by the trimmed literal.
///
/// Not an LRU: when an insert would find the cache at capacity, every entry
/// is dropped first, hot ones included. Owned by a single validator and
/// meant for single-threaded use.
#[derive(Debug, Clone)]
pub struct ValidationCache {
    entries: HashMap<String, Validation>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ValidationCache {
    /// Create an empty cache. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a trimmed literal, counting the hit or miss
    pub fn get(&mut self, key: &str) -> Option<&Validation> {
        match self.entries.get(key) {
            Some(outcome) => {
                self.hits += 1;
                Some(outcome)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store an outcome, clearing the whole cache first if it is full
    pub fn insert(&mut self, key: String, outcome: Validation) {
        if self.entries.len() >= self.capacity {
            tracing::debug!(
                capacity = self.capacity,
                "validation cache full, clearing all entries"
            );
            self.entries.clear();
        }
        self.entries.insert(key, outcome);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop all entries; hit/miss counters are kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ValidationCache {
    fn default() -> Self {
        Self::new(crate::domain::config::DEFAULT_CACHE_CAPACITY)
    }
}
