//! Aggregator Detail Path
//!
//! Answers one movie-detail request: two gateway calls (detail, credits)
//! and the local review join, run concurrently and merged under the
//! request-scoped movie id.

use super::{decode, poster_url, profile_url, Aggregator};
use crate::db::ReviewRow;
use crate::error::{ApiError, Result};
use crate::models::{CastEntry, CreditsDoc, CrewEntry, MovieDetailPayload, MovieDoc};
use crate::upstream::RequestDescriptor;

// == Constants ==
/// Upper bound on accepted movie ids; anything above is rejected before
/// any network activity
const MAX_MOVIE_ID: i64 = 1_000_000_000;

/// Cast entries kept after shaping, in provider-returned order
const CAST_LIMIT: usize = 5;

impl Aggregator {
    // == Movie Detail ==
    /// Fetches, merges, and shapes everything known about one movie.
    ///
    /// The detail and credits calls go through the cache gateway and run
    /// concurrently with the local review query; merging waits for all
    /// three branches. Any failed branch fails the whole request — a
    /// credits failure is not degraded to an empty cast list.
    pub async fn movie_detail(&self, movie_id: i64) -> Result<MovieDetailPayload> {
        if !(1..=MAX_MOVIE_ID).contains(&movie_id) {
            return Err(ApiError::Validation(format!(
                "movie id must be between 1 and {}, got {}",
                MAX_MOVIE_ID, movie_id
            )));
        }

        let detail_request = RequestDescriptor::movie_detail(movie_id);
        let credits_request = RequestDescriptor::movie_credits(movie_id);

        let (detail_outcome, credits_outcome, reviews_outcome) = tokio::join!(
            self.gateway.fetch(&detail_request),
            self.gateway.fetch(&credits_request),
            self.reviews.reviews_for_movie(movie_id),
        );

        let movie: MovieDoc = decode(detail_outcome?)?;
        let credits: CreditsDoc = decode(credits_outcome?)?;
        let reviews = reviews_outcome?;

        Ok(shape_detail(movie, credits, reviews))
    }
}

// == Merge / Shaping ==
/// Merges the three resolved branches into the fixed-key detail payload.
fn shape_detail(
    movie: MovieDoc,
    credits: CreditsDoc,
    reviews: Vec<ReviewRow>,
) -> MovieDetailPayload {
    let cast = credits
        .cast
        .into_iter()
        .map(|actor| CastEntry {
            id: actor.cast_id,
            name: actor.name,
            character: actor.character,
            profile_path: profile_url(actor.profile_path.as_deref()),
        })
        .take(CAST_LIMIT)
        .collect();

    let crew = credits
        .crew
        .into_iter()
        .filter(|member| member.job == "Director")
        .map(|member| CrewEntry {
            id: member.id,
            name: member.name,
            job: member.job,
            profile_path: profile_url(member.profile_path.as_deref()),
        })
        .collect();

    MovieDetailPayload {
        tmdb_id: movie.id,
        // The local id only exists once someone has reviewed the movie
        id: reviews.first().map(|row| row.id),
        title_fr: movie.title,
        status: movie.status,
        original_title: movie.original_title,
        adult: movie.adult,
        original_language: movie.original_language,
        release_date: movie.release_date,
        runtime: movie.runtime,
        budget: movie.budget,
        popularity: movie.popularity,
        rating: movie.vote_average,
        country: movie.origin_country,
        genres: movie.genres,
        tagline: movie.tagline,
        overview: movie.overview,
        poster_path: poster_url(movie.poster_path.as_deref()),
        cast,
        crew,
        reviews,
    }
}
