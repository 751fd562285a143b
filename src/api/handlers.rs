//! API Handlers
//!
//! HTTP request handlers for each remote procedure. Handlers forward
//! arguments to the store and wrap the results; they contain no business
//! logic of their own.

use std::sync::Arc;

use axum::{extract::State, Json};
use tokio::sync::{mpsc, RwLock};
use tracing::info;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{
    BatchResponse, DeleteResponse, GetManyResponse, GetResponse, HealthResponse, KeyRequest,
    KeysRequest, NumOpRequest, NumOpResponse, QuitResponse, SetManyRequest, SetRequest,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The store sits behind a single lock; every operation that touches entry
/// data (including `get`, which lazily evicts) takes the write half. The
/// shutdown sender carries the quit signal to the serve loop.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Channel used by the quit procedure to request graceful shutdown
    pub shutdown: mpsc::Sender<()>,
}

impl AppState {
    /// Creates a new AppState with the given cache store and shutdown sender.
    pub fn new(cache: CacheStore, shutdown: mpsc::Sender<()>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            shutdown,
        }
    }
}

/// Handler for POST /set
///
/// Stores a key-value pair with optional TTL, overwriting unconditionally.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Json<SetResponse> {
    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value, req.ttl);

    Json(SetResponse::new(req.key))
}

/// Handler for POST /get
///
/// Retrieves a value by key. An absent or expired key yields `found=false`;
/// expired entries are evicted as a side effect of the read.
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Json<GetResponse> {
    // Write lock: get mutates the store through lazy eviction and stats
    let mut cache = state.cache.write().await;
    let value = cache.get(&req.key);

    Json(GetResponse::new(req.key, value))
}

/// Handler for POST /delete
///
/// Removes a key; absent keys are a silent no-op, never an error.
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Json<DeleteResponse> {
    let mut cache = state.cache.write().await;
    cache.delete(&req.key);

    Json(DeleteResponse::new(req.key))
}

/// Handler for POST /set_many
///
/// Stores every pair in the mapping with no TTL.
pub async fn set_many_handler(
    State(state): State<AppState>,
    Json(req): Json<SetManyRequest>,
) -> Json<BatchResponse> {
    let count = req.entries.len();

    let mut cache = state.cache.write().await;
    cache.set_many(req.entries);

    Json(BatchResponse::new("Stored", count))
}

/// Handler for POST /get_many
///
/// Returns one result per requested key, in request order.
pub async fn get_many_handler(
    State(state): State<AppState>,
    Json(req): Json<KeysRequest>,
) -> Json<GetManyResponse> {
    let mut cache = state.cache.write().await;
    let values = cache.get_many(&req.keys);

    Json(GetManyResponse::new(values))
}

/// Handler for POST /delete_many
///
/// Removes every listed key, tolerating absent keys.
pub async fn delete_many_handler(
    State(state): State<AppState>,
    Json(req): Json<KeysRequest>,
) -> Json<BatchResponse> {
    let count = req.keys.len();

    let mut cache = state.cache.write().await;
    cache.delete_many(&req.keys);

    Json(BatchResponse::new("Deleted", count))
}

/// Handler for POST /incr
///
/// Increments a stored numeric value by `delta` (default 1). Failures
/// surface as a single invalid-operation fault.
pub async fn incr_handler(
    State(state): State<AppState>,
    Json(req): Json<NumOpRequest>,
) -> Result<Json<NumOpResponse>> {
    let delta = req.delta_or_default();

    let mut cache = state.cache.write().await;
    let value = cache.incr(&req.key, &delta)?;

    Ok(Json(NumOpResponse::new(req.key, value)))
}

/// Handler for POST /decr
///
/// Decrements a stored numeric value by `delta` (default 1). Symmetric to
/// incr, including the failure signal.
pub async fn decr_handler(
    State(state): State<AppState>,
    Json(req): Json<NumOpRequest>,
) -> Result<Json<NumOpResponse>> {
    let delta = req.delta_or_default();

    let mut cache = state.cache.write().await;
    let value = cache.decr(&req.key, &delta)?;

    Ok(Json(NumOpResponse::new(req.key, value)))
}

/// Handler for POST /quit
///
/// Requests graceful shutdown. The acknowledgement is delivered before the
/// serve loop stops accepting requests; in-flight responses complete. The
/// channel only needs to carry one signal, so repeated quits are
/// acknowledged without error.
pub async fn quit_handler(State(state): State<AppState>) -> Json<QuitResponse> {
    info!("Quit requested, signalling shutdown");
    let _ = state.shutdown.try_send(());

    Json(QuitResponse::new())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
