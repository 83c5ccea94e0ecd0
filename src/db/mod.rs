//! Local Store Module
//!
//! Read-side access to the locally owned rows (reviews and their authors),
//! correlated with upstream entities through the provider's movie id.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;

use crate::error::{ApiError, Result};

// == Review Row ==
/// One local review joined with its author, keyed by the provider movie id.
///
/// `id` is the local media row the review hangs off; the detail payload
/// surfaces it only when at least one review exists.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ReviewRow {
    pub review_id: i64,
    pub content: String,
    pub user_email: String,
    pub user_firstname: String,
    pub user_lastname: String,
    pub id: i64,
}

// == Review Source ==
/// Seam between the aggregator and the relational store.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Returns every local review for the movie with the given provider id,
    /// zero rows included.
    async fn reviews_for_movie(&self, tmdb_id: i64) -> Result<Vec<ReviewRow>>;
}

// == Postgres Review Store ==
/// `ReviewSource` backed by the service's Postgres pool.
pub struct PgReviewStore {
    pool: PgPool,
}

const REVIEWS_FOR_MOVIE_SQL: &str = r#"
SELECT "review".id::bigint AS review_id,
       "review".content,
       "user".email AS user_email,
       "user".firstname AS user_firstname,
       "user".lastname AS user_lastname,
       "media".id::bigint AS id
FROM "media"
JOIN "review" ON "media".id = "review".media_id
JOIN "user" ON "review".user_id = "user".id
WHERE "media".tmdb_id = $1
"#;

impl PgReviewStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a store with a lazily connected pool, so startup does not
    /// require a reachable database.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .connect_lazy(database_url)
            .map_err(|e| ApiError::LocalStore(e.to_string()))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ReviewSource for PgReviewStore {
    async fn reviews_for_movie(&self, tmdb_id: i64) -> Result<Vec<ReviewRow>> {
        sqlx::query_as::<_, ReviewRow>(REVIEWS_FOR_MOVIE_SQL)
            .bind(tmdb_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::LocalStore(e.to_string()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_row_serializes_all_columns() {
        let row = ReviewRow {
            review_id: 7,
            content: "Excellent film".to_string(),
            user_email: "jane@example.com".to_string(),
            user_firstname: "Jane".to_string(),
            user_lastname: "Doe".to_string(),
            id: 3,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["review_id"], 7);
        assert_eq!(json["content"], "Excellent film");
        assert_eq!(json["user_email"], "jane@example.com");
        assert_eq!(json["user_firstname"], "Jane");
        assert_eq!(json["user_lastname"], "Doe");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_join_query_is_keyed_by_provider_id() {
        assert!(REVIEWS_FOR_MOVIE_SQL.contains(r#""media".tmdb_id = $1"#));
    }
}
