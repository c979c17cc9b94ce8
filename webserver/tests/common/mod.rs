//! Test helpers for webserver integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use orchestrator::{
    Aggregator, BookDataSource, CatalogStore, FetcherSet, LatencyProfile, RecommendationSource,
};
use serde_json::Value;
use shared::{AttributeBag, BookId, BookSummary, UserId};
use tower::ServiceExt;
use webserver::WebServer;

/// Seeded catalog that counts every lookup it serves
#[derive(Clone)]
pub struct CountingCatalog {
    inner: CatalogStore,
    calls: Arc<AtomicUsize>,
}

impl CountingCatalog {
    pub fn new() -> Self {
        Self {
            inner: CatalogStore::seeded(LatencyProfile::none()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookDataSource for CountingCatalog {
    async fn fetch_metadata(&self, book_id: &BookId) -> AttributeBag {
        self.count();
        self.inner.fetch_metadata(book_id).await
    }

    async fn fetch_pricing(&self, book_id: &BookId) -> AttributeBag {
        self.count();
        self.inner.fetch_pricing(book_id).await
    }

    async fn fetch_inventory(&self, book_id: &BookId) -> AttributeBag {
        self.count();
        self.inner.fetch_inventory(book_id).await
    }

    async fn fetch_reviews(&self, book_id: &BookId) -> AttributeBag {
        self.count();
        self.inner.fetch_reviews(book_id).await
    }

    async fn list_books(&self) -> Vec<BookSummary> {
        self.inner.list_books().await
    }
}

/// Recommendation source answering without the network
pub struct StaticRecommendations;

#[async_trait]
impl RecommendationSource for StaticRecommendations {
    async fn fetch_recommendations(&self, book_id: &BookId, user_id: &UserId) -> AttributeBag {
        AttributeBag::new()
            .with("book_id", book_id.as_str())
            .with("user_id", user_id.as_str())
            .with("api_source", "static")
    }
}

/// Router over the counting catalog and static recommendations
pub fn test_router(catalog: &CountingCatalog) -> Router {
    let fetchers = FetcherSet::new(Arc::new(catalog.clone()), Arc::new(StaticRecommendations));
    let server = WebServer::new(Aggregator::new(fetchers), "127.0.0.1:0".parse().unwrap());
    server.build_router()
}

/// Send a GET and return status plus raw body text
pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a GET and parse the body as JSON
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    let value = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, value)
}
