//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies, one per remote
//! procedure. The handlers pass arguments through unchanged; type checking
//! for incr/decr happens in the store.

use std::collections::HashMap;

use serde::Deserialize;

use crate::cache::Value;

/// Request body for the SET procedure (POST /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl`: Optional TTL in seconds (no expiration if omitted)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds; fractional and non-positive values allowed
    #[serde(default)]
    pub ttl: Option<f64>,
}

/// Request body for single-key procedures (POST /get, POST /delete)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// The cache key
    pub key: String,
}

/// Request body for the SET_MANY procedure (POST /set_many)
///
/// Entries are stored with no TTL.
#[derive(Debug, Clone, Deserialize)]
pub struct SetManyRequest {
    /// The key-value pairs to store
    pub entries: HashMap<String, Value>,
}

/// Request body for multi-key procedures (POST /get_many, POST /delete_many)
#[derive(Debug, Clone, Deserialize)]
pub struct KeysRequest {
    /// The keys to operate on, in order
    pub keys: Vec<String>,
}

/// Request body for the INCR/DECR procedures (POST /incr, POST /decr)
///
/// `delta` defaults to 1 when omitted. It is deliberately typed as a cache
/// value rather than a number so that a non-numeric delta reaches the store
/// and fails there with the same signal as a non-numeric stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct NumOpRequest {
    /// The key to update
    pub key: String,
    /// The amount to add or subtract (defaults to 1)
    #[serde(default)]
    pub delta: Option<Value>,
}

impl NumOpRequest {
    /// Returns the requested delta, or the default of 1.
    pub fn delta_or_default(&self) -> Value {
        self.delta.clone().unwrap_or(Value::Int(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, Value::from("hello"));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": 10, "ttl": 60}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, Value::Int(10));
        assert_eq!(req.ttl, Some(60.0));
    }

    #[test]
    fn test_set_request_with_negative_ttl() {
        let json = r#"{"key": "test", "value": 1, "ttl": -0.5}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(-0.5));
    }

    #[test]
    fn test_set_many_request_deserialize() {
        let json = r#"{"entries": {"a": 1, "b": "two"}}"#;
        let req: SetManyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.entries.len(), 2);
        assert_eq!(req.entries["a"], Value::Int(1));
        assert_eq!(req.entries["b"], Value::from("two"));
    }

    #[test]
    fn test_keys_request_preserves_order() {
        let json = r#"{"keys": ["c", "a", "b"]}"#;
        let req: KeysRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_num_op_request_default_delta() {
        let json = r#"{"key": "counter"}"#;
        let req: NumOpRequest = serde_json::from_str(json).unwrap();
        assert!(req.delta.is_none());
        assert_eq!(req.delta_or_default(), Value::Int(1));
    }

    #[test]
    fn test_num_op_request_non_numeric_delta_accepted() {
        // A non-numeric delta must survive deserialization so the store can
        // reject it with the undifferentiated invalid-operation error.
        let json = r#"{"key": "counter", "delta": "x"}"#;
        let req: NumOpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.delta_or_default(), Value::from("x"));
    }
}
