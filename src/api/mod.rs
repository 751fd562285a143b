//! API Module
//!
//! HTTP handlers and routing for the cache server's remote procedures.
//!
//! # Procedures
//! - `POST /set`, `POST /get`, `POST /delete` - Single-key operations
//! - `POST /set_many`, `POST /get_many`, `POST /delete_many` - Batch operations
//! - `POST /incr`, `POST /decr` - Numeric updates
//! - `POST /quit` - Graceful shutdown
//! - `GET /stats`, `GET /health` - Observability

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
