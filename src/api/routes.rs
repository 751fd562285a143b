//! API Routes
//!
//! Configures the Axum router with one route per remote procedure.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    decr_handler, delete_handler, delete_many_handler, get_handler, get_many_handler,
    health_handler, incr_handler, quit_handler, set_handler, set_many_handler, stats_handler,
    AppState,
};

/// Creates the main router with all procedures configured.
///
/// # Procedures
/// - `POST /set` - Store a key-value pair with optional TTL
/// - `POST /get` - Retrieve a value by key
/// - `POST /delete` - Delete a key (no-op if absent)
/// - `POST /set_many` - Store a mapping of key-value pairs
/// - `POST /get_many` - Retrieve values for an ordered key list
/// - `POST /delete_many` - Delete a list of keys
/// - `POST /incr` - Increment a numeric value
/// - `POST /decr` - Decrement a numeric value
/// - `POST /quit` - Request graceful shutdown
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all procedures
    Router::new()
        .route("/set", post(set_handler))
        .route("/get", post(get_handler))
        .route("/delete", post(delete_handler))
        .route("/set_many", post(set_many_handler))
        .route("/get_many", post(get_many_handler))
        .route("/delete_many", post(delete_many_handler))
        .route("/incr", post(incr_handler))
        .route("/decr", post(decr_handler))
        .route("/quit", post(quit_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
