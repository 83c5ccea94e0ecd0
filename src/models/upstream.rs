//! Upstream Document Types
//!
//! Strongly typed views of the provider's JSON payloads. Every field the
//! provider may omit or null is an `Option`; lists the provider may drop
//! entirely default to empty so one missing array does not fail a decode
//! the shaping rules can handle.

use serde::{Deserialize, Serialize};

// == Genre Reference ==
/// A {id, name} genre pair, used both inside movie details and as the
/// catalog lookup table for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: i64,
    pub name: String,
}

// == Movie Detail Document ==
/// One movie's metadata as returned by `/movie/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDoc {
    pub id: i64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub status: Option<String>,
    pub adult: Option<bool>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i64>,
    pub budget: Option<i64>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub origin_country: Option<Vec<String>>,
    pub genres: Option<Vec<GenreRef>>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

// == Credits Document ==
/// Cast and crew for one movie as returned by `/movie/{id}/credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsDoc {
    #[serde(default)]
    pub cast: Vec<CastDoc>,
    #[serde(default)]
    pub crew: Vec<CrewDoc>,
}

/// One cast credit in provider order.
#[derive(Debug, Clone, Deserialize)]
pub struct CastDoc {
    pub cast_id: Option<i64>,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// One crew credit with its job title.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewDoc {
    pub id: Option<i64>,
    pub name: String,
    pub job: String,
    pub profile_path: Option<String>,
}

// == Discovery Document ==
/// A page of the discovery listing as returned by `/discover/movie`.
///
/// `results` stays optional: a structurally absent collection is a
/// different outcome than a present-but-empty page.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverDoc {
    pub results: Option<Vec<DiscoverEntry>>,
}

/// One movie summary inside a discovery page.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverEntry {
    pub id: i64,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub genre_ids: Option<Vec<i64>>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
}

// == Genre Catalog Document ==
/// The full genre catalog as returned by `/genre/movie/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreCatalogDoc {
    pub genres: Vec<GenreRef>,
}
