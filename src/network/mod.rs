//! Network Module
//!
//! HTTP surface for the inventory.
//!
//! ## Routes
//! | Method | Path              | Success                      |
//! |--------|-------------------|------------------------------|
//! | GET    | /inventory        | 200 `{"data": [...]}` or YAML with `?format=yaml` |
//! | GET    | /inventory/{id}   | 200 `{"data": {...}}`        |
//! | POST   | /inventory        | 200 `{"data": {...}}`        |
//! | PUT    | /inventory/{id}   | 200 `{"data": {...}}`        |
//! | DELETE | /inventory/{id}   | 202, empty body              |
//!
//! ## Architecture
//! - axum router on a multi-threaded tokio runtime
//! - Repository calls are blocking and run on the blocking pool
//! - Errors map to status codes in `response`

mod handlers;
mod response;
mod routes;
mod server;

pub use handlers::AppState;
pub use response::{ApiError, ApiResult, Data};
pub use routes::create_router;
pub use server::{shutdown_signal, HttpServer};
