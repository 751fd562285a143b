//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::Value;

/// Response body for the GET procedure (POST /get)
///
/// `found` is the absent-marker: it distinguishes "no usable entry" from
/// every storable value, so clients never have to reserve a sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// Whether a live entry was found for the key
    pub found: bool,
    /// The stored value, if found
    pub value: Option<Value>,
}

impl GetResponse {
    /// Creates a new GetResponse from a lookup result
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            found: value.is_some(),
            value,
        }
    }
}

/// A single slot in a GET_MANY response.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    /// Whether a live entry was found for the corresponding key
    pub found: bool,
    /// The stored value, if found
    pub value: Option<Value>,
}

impl From<Option<Value>> for LookupResult {
    fn from(value: Option<Value>) -> Self {
        Self {
            found: value.is_some(),
            value,
        }
    }
}

/// Response body for the GET_MANY procedure (POST /get_many)
///
/// `results` has the same length and order as the requested keys.
#[derive(Debug, Clone, Serialize)]
pub struct GetManyResponse {
    /// One lookup result per requested key, aligned 1:1
    pub results: Vec<LookupResult>,
}

impl GetManyResponse {
    /// Creates a new GetManyResponse from per-key lookup results
    pub fn new(values: Vec<Option<Value>>) -> Self {
        Self {
            results: values.into_iter().map(LookupResult::from).collect(),
        }
    }
}

/// Response body for the SET procedure (POST /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for the DELETE procedure (POST /delete)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted (or was already absent)
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted", key),
            key,
        }
    }
}

/// Response body for batch write/delete procedures
/// (POST /set_many, POST /delete_many)
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    /// Success message
    pub message: String,
    /// Number of keys the batch covered
    pub count: usize,
}

impl BatchResponse {
    /// Creates a new BatchResponse
    pub fn new(verb: &str, count: usize) -> Self {
        Self {
            message: format!("{} {} keys", verb, count),
            count,
        }
    }
}

/// Response body for the INCR/DECR procedures (POST /incr, POST /decr)
#[derive(Debug, Clone, Serialize)]
pub struct NumOpResponse {
    /// The key that was updated
    pub key: String,
    /// The new stored value
    pub value: Value,
}

impl NumOpResponse {
    /// Creates a new NumOpResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the QUIT procedure (POST /quit)
#[derive(Debug, Clone, Serialize)]
pub struct QuitResponse {
    /// Acknowledgement message
    pub message: String,
}

impl QuitResponse {
    /// Creates a new QuitResponse
    pub fn new() -> Self {
        Self {
            message: "Shutting down after current requests".to_string(),
        }
    }
}

impl Default for QuitResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed lazily after their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, expirations: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expirations,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
