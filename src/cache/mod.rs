//! Cache Module
//!
//! Provides in-memory key-value caching with lazy TTL expiration and
//! numeric increment/decrement.

mod entry;
mod stats;
mod store;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::Value;
