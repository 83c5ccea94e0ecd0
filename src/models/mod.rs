//! Models Module
//!
//! Typed upstream documents and the externally shaped response payloads.

mod payloads;
mod upstream;

// Re-export public types
pub use payloads::{ApiSuccess, CastEntry, CrewEntry, MovieDetailPayload, MovieSummary};
pub use upstream::{
    CastDoc, CreditsDoc, CrewDoc, DiscoverDoc, DiscoverEntry, GenreCatalogDoc, GenreRef, MovieDoc,
};
