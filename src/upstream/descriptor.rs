//! Request Descriptor Module
//!
//! Value type naming one upstream resource: provider path plus ordered
//! query parameters, with the response language pinned for catalog
//! consistency. The descriptor is the cache identity for the gateway.

// == Constants ==
/// Fixed response locale sent on every provider call
pub const LANGUAGE: &str = "fr-FR";

// == Request Descriptor ==
/// Uniquely identifies an upstream resource (path + query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    query: Vec<(String, String)>,
}

impl RequestDescriptor {
    // == Endpoint Constructors ==
    /// Descriptor for a single movie's metadata.
    pub fn movie_detail(movie_id: i64) -> Self {
        Self {
            path: format!("/movie/{}", movie_id),
            query: vec![("language".to_string(), LANGUAGE.to_string())],
        }
    }

    /// Descriptor for a movie's cast and crew.
    pub fn movie_credits(movie_id: i64) -> Self {
        Self {
            path: format!("/movie/{}/credits", movie_id),
            query: vec![("language".to_string(), LANGUAGE.to_string())],
        }
    }

    /// Descriptor for a filtered discovery listing.
    ///
    /// Validated filter parameters are forwarded verbatim after the pinned
    /// language, in a fixed order so identical filters share a cache key.
    pub fn discover(page: &str, year: &str, sort_by: &str) -> Self {
        Self {
            path: "/discover/movie".to_string(),
            query: vec![
                ("language".to_string(), LANGUAGE.to_string()),
                ("page".to_string(), page.to_string()),
                ("year".to_string(), year.to_string()),
                ("sort_by".to_string(), sort_by.to_string()),
            ],
        }
    }

    /// Descriptor for the full genre catalog.
    pub fn genre_catalog() -> Self {
        Self {
            path: "/genre/movie/list".to_string(),
            query: vec![("language".to_string(), LANGUAGE.to_string())],
        }
    }

    // == Accessors ==
    /// Provider path for this resource.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in canonical order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    // == Cache Key ==
    /// Deterministic cache key: the canonicalized path and query string.
    pub fn cache_key(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}
