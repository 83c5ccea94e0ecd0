//! API Module
//!
//! HTTP boundary: route declarations and the thin handlers that dispatch
//! validated input to the aggregator.

mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::create_router;
