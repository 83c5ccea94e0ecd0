//! Aggregator Listing Path
//!
//! Answers one filtered-listing request: validate the filter, fan out to
//! the discovery endpoint and the genre catalog through the gateway, then
//! shape each entry with its genre ids resolved against the catalog.

use std::collections::HashMap;

use serde::Deserialize;

use super::{decode, poster_url, Aggregator};
use crate::error::{ApiError, Result};
use crate::models::{DiscoverDoc, DiscoverEntry, GenreCatalogDoc, GenreRef, MovieSummary};
use crate::upstream::RequestDescriptor;

// == Sort Tokens ==
/// The full set of sort orders the discovery endpoint accepts.
pub const SORT_TOKENS: [&str; 14] = [
    "popularity.asc",
    "popularity.desc",
    "release_date.asc",
    "release_date.desc",
    "revenue.asc",
    "revenue.desc",
    "primary_release_date.asc",
    "primary_release_date.desc",
    "title.asc",
    "title.desc",
    "vote_average.asc",
    "vote_average.desc",
    "vote_count.asc",
    "vote_count.desc",
];

// == Listing Query ==
/// Raw filter parameters as they arrive from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub year: Option<String>,
    pub sort_by: Option<String>,
}

/// A filter that passed validation, ready to forward upstream verbatim.
#[derive(Debug, Clone, PartialEq)]
struct ValidatedFilter {
    page: String,
    year: String,
    sort_by: String,
}

impl ListingQuery {
    // == Validation ==
    /// Checks the filter against the fixed schema.
    ///
    /// Runs before any network or cache activity; violations surface the
    /// exact offending value (and, for `sort_by`, the full allowed set).
    fn validate(&self) -> Result<ValidatedFilter> {
        let page = self
            .page
            .as_deref()
            .ok_or_else(|| ApiError::Validation("page is required".to_string()))?;
        if page.parse::<u32>().map_or(true, |p| p == 0) {
            return Err(ApiError::Validation(format!(
                "page must be a positive integer, got \"{}\"",
                page
            )));
        }

        let year = self
            .year
            .as_deref()
            .ok_or_else(|| ApiError::Validation("year is required".to_string()))?;

        let sort_by = self
            .sort_by
            .as_deref()
            .ok_or_else(|| ApiError::Validation("sort_by is required".to_string()))?;
        if !SORT_TOKENS.contains(&sort_by) {
            return Err(ApiError::Validation(format!(
                "sort_by must be one of {}, got \"{}\"",
                SORT_TOKENS.join(", "),
                sort_by
            )));
        }

        Ok(ValidatedFilter {
            page: page.to_string(),
            year: year.to_string(),
            sort_by: sort_by.to_string(),
        })
    }
}

impl Aggregator {
    // == List Movies ==
    /// Fetches one discovery page and shapes every entry.
    ///
    /// A page whose `results` collection is structurally absent fails with
    /// `NoPageFound`; a present-but-empty page is an empty success.
    pub async fn list_movies(&self, query: &ListingQuery) -> Result<Vec<MovieSummary>> {
        let filter = query.validate()?;

        let discover_request =
            RequestDescriptor::discover(&filter.page, &filter.year, &filter.sort_by);
        let catalog_request = RequestDescriptor::genre_catalog();

        let (listing_outcome, catalog_outcome) = tokio::join!(
            self.gateway.fetch(&discover_request),
            self.gateway.fetch(&catalog_request),
        );

        let listing: DiscoverDoc = decode(listing_outcome?)?;
        let entries = listing.results.ok_or(ApiError::NoPageFound)?;

        let catalog: GenreCatalogDoc = decode(catalog_outcome?)?;
        let genres_by_id: HashMap<i64, GenreRef> =
            catalog.genres.into_iter().map(|g| (g.id, g)).collect();

        entries
            .into_iter()
            .map(|entry| shape_summary(entry, &genres_by_id))
            .collect()
    }
}

// == Merge / Shaping ==
/// Shapes one listing entry, resolving its genre ids against the catalog.
///
/// An id the catalog cannot resolve is a data-consistency fault surfaced
/// as a typed failure rather than a crash.
fn shape_summary(
    entry: DiscoverEntry,
    genres_by_id: &HashMap<i64, GenreRef>,
) -> Result<MovieSummary> {
    let genres = match entry.genre_ids {
        None => None,
        Some(ids) => Some(
            ids.into_iter()
                .map(|genre_id| {
                    genres_by_id
                        .get(&genre_id)
                        .cloned()
                        .ok_or(ApiError::GenreResolution(genre_id))
                })
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    Ok(MovieSummary {
        tmdb_id: entry.id,
        title_fr: entry.title,
        release_date: entry.release_date,
        poster_path: poster_url(entry.poster_path.as_deref()),
        genres,
        vote_average: entry.vote_average,
        vote_count: entry.vote_count,
    })
}
