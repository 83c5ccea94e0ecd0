//! Upstream Module
//!
//! Everything that talks to the metadata provider: request descriptors,
//! the authenticated HTTP client, and the cache gateway fronting it.

mod client;
mod descriptor;
mod gateway;

// Re-export public types
pub use client::{UpstreamClient, UpstreamError};
pub use descriptor::{RequestDescriptor, LANGUAGE};
pub use gateway::CacheGateway;
