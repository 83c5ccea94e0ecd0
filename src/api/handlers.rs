//! API Handlers
//!
//! Thin boundary glue: parse the validated input shape, hand it to the
//! aggregator, and wrap the outcome in the response envelope. No policy
//! lives here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::aggregator::{Aggregator, ListingQuery};
use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{ApiSuccess, MovieDetailPayload, MovieSummary};

/// Application state shared across all handlers.
///
/// Holds the single process-wide aggregator (which owns the cache gateway)
/// and a handle on the cache store for the operational stats endpoint.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(aggregator: Arc<Aggregator>, cache: Arc<RwLock<CacheStore>>) -> Self {
        Self { aggregator, cache }
    }
}

/// Handler for GET /movies/:id
///
/// Returns the merged detail payload for one movie.
pub async fn movie_detail_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<ApiSuccess<MovieDetailPayload>>> {
    let payload = state.aggregator.movie_detail(movie_id).await?;
    Ok(Json(ApiSuccess::new(payload)))
}

/// Handler for GET /movies
///
/// Returns one shaped discovery page for the given filter.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ApiSuccess<Vec<MovieSummary>>>> {
    let movies = state.aggregator.list_movies(&query).await?;
    Ok(Json(ApiSuccess::new(movies)))
}

/// Handler for GET /cache/stats
///
/// Returns current cache gateway statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let stats = state.cache.read().await.stats();

    Json(serde_json::json!({
        "hits": stats.hits,
        "misses": stats.misses,
        "evictions": stats.evictions,
        "total_entries": stats.total_entries,
        "hit_rate": stats.hit_rate(),
    }))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ReviewRow, ReviewSource};
    use crate::upstream::{CacheGateway, UpstreamClient};
    use async_trait::async_trait;

    struct NoReviews;

    #[async_trait]
    impl ReviewSource for NoReviews {
        async fn reviews_for_movie(&self, _tmdb_id: i64) -> Result<Vec<ReviewRow>> {
            Ok(vec![])
        }
    }

    fn test_state() -> AppState {
        let cache = Arc::new(RwLock::new(CacheStore::new(100)));
        let client = UpstreamClient::new("http://127.0.0.1:9", "test-token", 1).unwrap();
        let gateway = Arc::new(CacheGateway::new(client, cache.clone(), None));
        let aggregator = Arc::new(Aggregator::new(gateway, Arc::new(NoReviews)));
        AppState::new(aggregator, cache)
    }

    #[tokio::test]
    async fn test_detail_handler_rejects_invalid_id() {
        let state = test_state();

        let result = movie_detail_handler(State(state), Path(0)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_handler_rejects_invalid_filter() {
        let state = test_state();

        let query = ListingQuery {
            page: Some("1".to_string()),
            year: Some("2023".to_string()),
            sort_by: Some("invalid_token".to_string()),
        };
        let result = list_movies_handler(State(state), Query(query)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let state = test_state();

        let response = cache_stats_handler(State(state)).await;
        assert_eq!(response.0["hits"], 0);
        assert_eq!(response.0["misses"], 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.0["status"], "healthy");
    }
}
