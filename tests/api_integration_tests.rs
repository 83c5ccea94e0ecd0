//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle: envelope shape, status mapping,
//! and pass-through from the router to the aggregator.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cinescope::aggregator::Aggregator;
use cinescope::api::{create_router, AppState};
use cinescope::cache::CacheStore;
use cinescope::db::{ReviewRow, ReviewSource};
use cinescope::upstream::{CacheGateway, UpstreamClient};

// == Helper Functions ==

struct StubReviews(Vec<ReviewRow>);

#[async_trait]
impl ReviewSource for StubReviews {
    async fn reviews_for_movie(
        &self,
        _tmdb_id: i64,
    ) -> cinescope::error::Result<Vec<ReviewRow>> {
        Ok(self.0.clone())
    }
}

fn create_test_app(server_uri: &str, reviews: Vec<ReviewRow>) -> Router {
    let cache = Arc::new(RwLock::new(CacheStore::new(100)));
    let client = UpstreamClient::new(server_uri, "test-token", 2).unwrap();
    let gateway = Arc::new(CacheGateway::new(client, cache.clone(), None));
    let aggregator = Arc::new(Aggregator::new(gateway, Arc::new(StubReviews(reviews))));
    create_router(AppState::new(aggregator, cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let json = body_to_json(response.into_body()).await;
    (status, json)
}

// == Detail Endpoint Tests ==

#[tokio::test]
async fn test_detail_endpoint_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club",
            "vote_average": 8.4,
            "poster_path": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/550/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cast": [],
            "crew": []
        })))
        .mount(&server)
        .await;

    let reviews = vec![ReviewRow {
        review_id: 7,
        content: "Superbe".to_string(),
        user_email: "jane@example.com".to_string(),
        user_firstname: "Jane".to_string(),
        user_lastname: "Doe".to_string(),
        id: 3,
    }];
    let app = create_test_app(&server.uri(), reviews);

    let (status, json) = get(app, "/movies/550").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["tmdb_id"], 550);
    assert_eq!(json["data"]["id"], 3);
    assert_eq!(json["data"]["title_fr"], "Fight Club");
    // Absent provider data is an explicit null, never a missing key
    assert!(json["data"]["poster_path"].is_null());
    assert!(json["data"].get("tagline").is_some());
    assert_eq!(json["data"]["reviews"][0]["user_email"], "jane@example.com");
}

#[tokio::test]
async fn test_detail_endpoint_invalid_id_is_validation_failure() {
    let server = MockServer::start().await;
    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/movies/0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["error"]["kind"], "validation");
}

#[tokio::test]
async fn test_detail_endpoint_maps_provider_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/999999/credits"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/movies/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["error"]["kind"], "upstream_rejected");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("could not be found"));
}

// == Listing Endpoint Tests ==

#[tokio::test]
async fn test_listing_endpoint_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{
                "id": 550,
                "title": "Fight Club",
                "release_date": "1999-10-15",
                "poster_path": "/p.jpg",
                "genre_ids": [18],
                "vote_average": 8.4,
                "vote_count": 27000
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [{"id": 18, "name": "Drame"}]
        })))
        .mount(&server)
        .await;

    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/movies?page=1&year=2023&sort_by=popularity.desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"][0]["tmdb_id"], 550);
    assert_eq!(json["data"][0]["genres"][0]["name"], "Drame");
}

#[tokio::test]
async fn test_listing_endpoint_invalid_sort_cites_allowed_set() {
    let server = MockServer::start().await;
    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/movies?page=1&year=2023&sort_by=bogus").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "validation");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("bogus"));
    assert!(message.contains("popularity.desc"));
}

#[tokio::test]
async fn test_listing_endpoint_absent_page_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 9999})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"genres": []})))
        .mount(&server)
        .await;

    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/movies?page=9999&year=2023&sort_by=popularity.desc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["kind"], "no_page_found");
}

// == Operational Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let app = create_test_app(&server.uri(), vec![]);

    let (status, json) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_cache_stats_endpoint_reflects_gateway_traffic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 550})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/550/credits"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"cast": [], "crew": []})),
        )
        .mount(&server)
        .await;

    let app = create_test_app(&server.uri(), vec![]);

    let (_, _) = get(app.clone(), "/movies/550").await;
    let (_, _) = get(app.clone(), "/movies/550").await;

    let (status, json) = get(app, "/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    // First request missed both resources, second hit both
    assert_eq!(json["misses"], 2);
    assert_eq!(json["hits"], 2);
    assert_eq!(json["total_entries"], 2);
}
