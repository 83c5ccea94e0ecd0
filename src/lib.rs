//! Cinescope - movie catalog aggregation backend
//!
//! Serves merged movie metadata from an upstream catalog provider through
//! a cache-aside gateway, joined with locally stored user reviews.

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
