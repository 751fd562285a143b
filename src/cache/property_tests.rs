//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's observable behavior against a simple
//! in-memory model.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{CacheStore, Value};

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}".prop_map(|s| s)
}

/// Generates storable cache values (finite floats only, so equality holds)
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::Int),
        (-1e9f64..1e9).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,32}".prop_map(Value::Str),
    ]
}

/// A single cache operation for sequence-based tests
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round-trip: storing a pair and retrieving it (no TTL) returns the
    // exact value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value.clone(), None);

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // Overwrite: setting the same key twice leaves exactly one entry
    // holding the second value.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value1, None);
        store.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Delete: after a delete, a get on that key is absent, and deleting
    // again is a harmless no-op.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value, None);
        prop_assert!(store.get(&key).is_some());

        store.delete(&key);
        prop_assert_eq!(store.get(&key), None);

        store.delete(&key);
        prop_assert_eq!(store.get(&key), None);
    }

    // Model equivalence: any sequence of set/get/delete (no TTL) observes
    // the same values a plain HashMap would.
    #[test]
    fn prop_model_equivalence(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Value> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), None);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                    model.remove(&key);
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // Statistics: hits and misses reflect exactly the get outcomes.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value, None);
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // get_many returns one slot per requested key, in request order, each
    // slot matching the single-key get rule.
    #[test]
    fn prop_get_many_alignment(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..20),
        keys in prop::collection::vec(key_strategy(), 0..30)
    ) {
        let mut store = CacheStore::new();
        store.set_many(entries.clone());

        let results = store.get_many(&keys);

        prop_assert_eq!(results.len(), keys.len(), "Result length mismatch");
        for (key, result) in keys.iter().zip(results) {
            prop_assert_eq!(result, entries.get(key).cloned(), "Slot mismatch for '{}'", key);
        }
    }

    // delete_many removes every listed key and tolerates absent ones.
    #[test]
    fn prop_delete_many(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..20),
        keys in prop::collection::vec(key_strategy(), 0..30)
    ) {
        let mut store = CacheStore::new();
        store.set_many(entries.clone());

        store.delete_many(&keys);

        for key in &keys {
            prop_assert_eq!(store.get(key), None, "Key '{}' should be gone", key);
        }
        let expected_remaining = entries.keys().filter(|k| !keys.contains(k)).count();
        prop_assert_eq!(store.len(), expected_remaining);
    }

    // incr applied over a sequence of integer deltas matches plain integer
    // arithmetic (deltas kept small so no overflow path is hit).
    #[test]
    fn prop_incr_matches_integer_arithmetic(
        key in key_strategy(),
        start in -1_000_000i64..1_000_000,
        deltas in prop::collection::vec(-1000i64..1000, 1..20)
    ) {
        let mut store = CacheStore::new();
        store.set(key.clone(), Value::Int(start), None);

        let mut expected = start;
        for delta in deltas {
            expected += delta;
            let updated = store.incr(&key, &Value::Int(delta)).unwrap();
            prop_assert_eq!(updated, Value::Int(expected));
        }

        prop_assert_eq!(store.get(&key), Some(Value::Int(expected)));
    }

    // decr mirrors incr with subtraction.
    #[test]
    fn prop_decr_mirrors_incr(
        key in key_strategy(),
        start in -1_000_000i64..1_000_000,
        delta in -1000i64..1000
    ) {
        let mut store = CacheStore::new();

        store.set(key.clone(), Value::Int(start), None);
        let decremented = store.decr(&key, &Value::Int(delta)).unwrap();

        store.set(key.clone(), Value::Int(start), None);
        let incremented = store.incr(&key, &Value::Int(-delta)).unwrap();

        prop_assert_eq!(decremented, incremented);
    }

    // incr on a key that was never set always fails.
    #[test]
    fn prop_incr_missing_key_fails(key in key_strategy(), delta in -1000i64..1000) {
        let mut store = CacheStore::new();

        prop_assert!(store.incr(&key, &Value::Int(delta)).is_err());
        prop_assert!(store.decr(&key, &Value::Int(delta)).is_err());
    }

    // incr on a non-numeric value always fails and leaves the value intact.
    #[test]
    fn prop_incr_non_numeric_value_fails(
        key in key_strategy(),
        value in "[a-zA-Z ]{0,32}",
        delta in -1000i64..1000
    ) {
        let mut store = CacheStore::new();
        store.set(key.clone(), Value::Str(value.clone()), None);

        prop_assert!(store.incr(&key, &Value::Int(delta)).is_err());
        prop_assert_eq!(store.get(&key), Some(Value::Str(value)));
    }
}
