//! Mini Memcache - A lightweight in-memory key-value cache server
//!
//! Provides remote get/set/delete operations (single and batch), per-key
//! TTL with lazy expiration, and atomic numeric increment/decrement.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheStore, Value};
pub use config::Config;
pub use error::{CacheError, Result};
