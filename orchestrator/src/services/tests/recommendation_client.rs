//! Tests for the HTTP recommendation client against a local mock API

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{book, user};
use crate::services::recommendation_client::{HttpRecommendationSource, RECOMMENDATIONS_FAILED, RESPONSE_UNREADABLE};
use crate::traits::RecommendationSource;

async fn quote_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// Test a successful call is folded into the recommendation bag
#[tokio::test]
async fn test_successful_recommendations() {
    let server = quote_server(
        ResponseTemplate::new(200).set_body_json(json!([{ "q": "Read more.", "a": "Someone", "h": null }])),
    )
    .await;
    let client = HttpRecommendationSource::new(&format!("{}/api/random", server.uri())).unwrap();

    let bag = client.fetch_recommendations(&book("2"), &user("reader-7")).await;

    assert!(!bag.is_error());
    let value = serde_json::to_value(&bag).unwrap();
    assert_eq!(value["user_id"], "reader-7");
    assert_eq!(value["book_id"], "2");
    assert_eq!(value["api_source"], "127.0.0.1");
    assert_eq!(value["external_quote"], json!([{ "q": "Read more.", "a": "Someone", "h": null }]));
    assert_eq!(value["recommendations"][0]["source"], "external_api_enriched");
}

/// Test an error status is reported as an unreadable response
#[tokio::test]
async fn test_error_status() {
    let server = quote_server(ResponseTemplate::new(503)).await;
    let client = HttpRecommendationSource::new(&format!("{}/api/random", server.uri())).unwrap();

    let bag = client.fetch_recommendations(&book("1"), &user("u")).await;

    assert_eq!(bag.error_message(), Some(RESPONSE_UNREADABLE));
}

/// Test a body that is not a JSON array is rejected
#[tokio::test]
async fn test_unexpected_body() {
    let server = quote_server(ResponseTemplate::new(200).set_body_string("<html>nope</html>")).await;
    let client = HttpRecommendationSource::new(&format!("{}/api/random", server.uri())).unwrap();

    let bag = client.fetch_recommendations(&book("1"), &user("u")).await;

    assert_eq!(bag.error_message(), Some(RESPONSE_UNREADABLE));
}

/// Test transport failures carry the failure source marker
#[tokio::test]
async fn test_transport_failure() {
    let server = quote_server(ResponseTemplate::new(200).set_delay(Duration::from_millis(500))).await;
    let client =
        HttpRecommendationSource::with_timeout(&format!("{}/api/random", server.uri()), Duration::from_millis(50))
            .unwrap();

    let bag = client.fetch_recommendations(&book("1"), &user("u")).await;

    assert_eq!(bag.error_message(), Some(RECOMMENDATIONS_FAILED));
    assert_eq!(bag.get("source").and_then(|v| v.as_str()), Some("external_api_failed"));
}

#[test]
fn test_invalid_endpoint_rejected() {
    assert!(HttpRecommendationSource::new("not a url").is_err());
}
