//! Handler-Facing Payloads
//!
//! Externally shaped response bodies produced by the aggregator. Every
//! field is serialized unconditionally: data the provider left out appears
//! as an explicit `null`, never as an omitted key.

use serde::Serialize;

use crate::db::ReviewRow;
use crate::models::GenreRef;

// == Success Envelope ==
/// Wrapper around every successful response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    /// Always "success"; failures use the error envelope instead
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    /// Wraps `data` in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

// == Cast / Crew Entries ==
/// One shaped cast credit.
#[derive(Debug, Clone, Serialize)]
pub struct CastEntry {
    pub id: Option<i64>,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// One shaped crew credit (only directors survive shaping).
#[derive(Debug, Clone, Serialize)]
pub struct CrewEntry {
    pub id: Option<i64>,
    pub name: String,
    pub job: String,
    pub profile_path: Option<String>,
}

// == Movie Detail Payload ==
/// The merged detail response: one provider detail document, its shaped
/// credits, and the locally stored reviews.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailPayload {
    /// Provider identifier, the join key shared with the local store
    pub tmdb_id: i64,
    /// Local media row id, present only when at least one review exists
    pub id: Option<i64>,
    pub title_fr: Option<String>,
    pub status: Option<String>,
    pub original_title: Option<String>,
    pub adult: Option<bool>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub budget: Option<i64>,
    pub popularity: Option<f64>,
    pub rating: Option<f64>,
    pub country: Option<Vec<String>>,
    pub genres: Option<Vec<GenreRef>>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub cast: Vec<CastEntry>,
    pub crew: Vec<CrewEntry>,
    pub reviews: Vec<ReviewRow>,
}

// == Movie Summary ==
/// One shaped listing entry with its genre ids resolved against the
/// catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSummary {
    pub tmdb_id: i64,
    pub title_fr: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    /// Null when the provider supplied no genre ids at all
    pub genres: Option<Vec<GenreRef>>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
}
