//! Cache Store Module
//!
//! Main cache engine: a key-value map with lazy TTL expiration and atomic
//! numeric counters.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, Value};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with lazy TTL expiration.
///
/// Expired entries are removed only when the key is accessed by a read
/// operation; there is no background sweep and no capacity bound.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new, empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Overwrites unconditionally if the key already exists. The TTL is
    /// given in seconds; zero or negative values produce an entry that is
    /// already expired on the next access.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (no expiration if None)
    pub fn set(&mut self, key: String, value: Value, ttl: Option<f64>) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is unknown or its TTL has elapsed. An
    /// expired entry is removed here, as a side effect of the access (lazy
    /// eviction), and counts as a miss.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key. Absent keys are a silent no-op.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Set Many ==
    /// Stores every pair in the mapping, with no TTL.
    ///
    /// Keys are independent, so iteration order is irrelevant.
    ///
    /// # Arguments
    /// * `entries` - The key-value pairs to store
    pub fn set_many(&mut self, entries: HashMap<String, Value>) {
        for (key, value) in entries {
            self.set(key, value, None);
        }
    }

    // == Get Many ==
    /// Retrieves a value per key, preserving input order.
    ///
    /// The result has the same length as the input; each slot holds the
    /// single-key `get` result for the corresponding key, including the
    /// lazy-eviction side effect.
    ///
    /// # Arguments
    /// * `keys` - The keys to retrieve, in order
    pub fn get_many(&mut self, keys: &[String]) -> Vec<Option<Value>> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    // == Delete Many ==
    /// Removes every listed key, tolerating absent keys silently.
    ///
    /// # Arguments
    /// * `keys` - The keys to delete
    pub fn delete_many(&mut self, keys: &[String]) {
        for key in keys {
            self.delete(key);
        }
    }

    // == Incr ==
    /// Increments the value stored at `key` by `delta`.
    ///
    /// Fails with [`CacheError::InvalidOperation`] when the key is missing,
    /// the stored value is not numeric, or `delta` is not numeric. On
    /// success the stored value is replaced and the new value returned; the
    /// entry's expiration is left untouched.
    ///
    /// Expiry is not re-checked here: an increment on a lazily expired but
    /// not yet evicted entry still succeeds against the stale value.
    ///
    /// # Arguments
    /// * `key` - The key to increment
    /// * `delta` - The amount to add
    pub fn incr(&mut self, key: &str, delta: &Value) -> Result<Value> {
        self.apply_numeric(key, |value| value.checked_add(delta))
    }

    // == Decr ==
    /// Decrements the value stored at `key` by `delta`.
    ///
    /// Mirrors [`CacheStore::incr`] with subtraction, including the single
    /// undifferentiated failure signal.
    ///
    /// # Arguments
    /// * `key` - The key to decrement
    /// * `delta` - The amount to subtract
    pub fn decr(&mut self, key: &str, delta: &Value) -> Result<Value> {
        self.apply_numeric(key, |value| value.checked_sub(delta))
    }

    /// Shared incr/decr plumbing: look up the entry, apply the arithmetic,
    /// store the result in place.
    fn apply_numeric<F>(&mut self, key: &str, op: F) -> Result<Value>
    where
        F: FnOnce(&Value) -> Option<Value>,
    {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| CacheError::InvalidOperation(key.to_string()))?;

        let updated =
            op(&entry.value).ok_or_else(|| CacheError::InvalidOperation(key.to_string()))?;

        entry.value = updated.clone();
        Ok(updated)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    ///
    /// Note: this may include expired entries that have not been accessed
    /// (and therefore not evicted) yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Contains Raw ==
    /// Returns true if the key is physically present, expired or not.
    ///
    /// Used by tests to observe lazy-eviction behavior; a plain read would
    /// evict the entry as a side effect.
    pub fn contains_raw(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
