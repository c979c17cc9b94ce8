//! Test fixtures and data for orchestrator tests
//!
//! Provides a scripted data source whose per-slot latency and outcome are set
//! by each test, so orchestration behavior can be checked without the real
//! catalog.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use orchestrator::{BookDataSource, LatencyProfile, RecommendationSource};
use shared::{AttributeBag, BookId, BookSummary, Resource, UserId};

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    pub const BOOK_ID: &'static str = "1";
    pub const UNKNOWN_BOOK_ID: &'static str = "404";
    pub const USER_ID: &'static str = "reader-42";

    /// Default catalog delays: 80, 120, 150, 100 ms
    pub fn benchmark_latency() -> LatencyProfile {
        LatencyProfile::default()
    }
}

/// What a scripted lookup does once its delay has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeed,
    Fail,
    Panic,
}

/// Data source with scripted latency and outcome per slot
#[derive(Clone)]
pub struct ScriptedSource {
    latency: LatencyProfile,
    recommendation_delay: Duration,
    outcomes: HashMap<Resource, Outcome>,
    calls: Arc<AtomicUsize>,
    completed: Arc<Mutex<Vec<Resource>>>,
}

impl ScriptedSource {
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            latency,
            recommendation_delay: Duration::ZERO,
            outcomes: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn instant() -> Self {
        Self::new(LatencyProfile::none())
    }

    pub fn with_outcome(mut self, resource: Resource, outcome: Outcome) -> Self {
        self.outcomes.insert(resource, outcome);
        self
    }

    pub fn with_recommendation_delay(mut self, delay: Duration) -> Self {
        self.recommendation_delay = delay;
        self
    }

    /// Number of lookups started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Slots in the order their lookups finished
    pub fn completion_order(&self) -> Vec<Resource> {
        self.completed.lock().unwrap().clone()
    }

    fn delay_for(&self, resource: Resource) -> Duration {
        match resource {
            Resource::Recommendations => self.recommendation_delay,
            other => self.latency.delay_for(other),
        }
    }

    async fn respond(&self, resource: Resource, book_id: &BookId) -> AttributeBag {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay_for(resource)).await;

        let outcome = self.outcomes.get(&resource).copied().unwrap_or(Outcome::Succeed);
        if outcome == Outcome::Panic {
            panic!("scripted {resource} lookup panicked");
        }
        self.completed.lock().unwrap().push(resource);

        match outcome {
            Outcome::Fail => AttributeBag::error(format!("Failed to fetch {resource}")),
            _ => AttributeBag::new()
                .with("resource", resource.as_str())
                .with("book_id", book_id.as_str()),
        }
    }
}

#[async_trait]
impl BookDataSource for ScriptedSource {
    async fn fetch_metadata(&self, book_id: &BookId) -> AttributeBag {
        self.respond(Resource::Metadata, book_id).await
    }

    async fn fetch_pricing(&self, book_id: &BookId) -> AttributeBag {
        self.respond(Resource::Pricing, book_id).await
    }

    async fn fetch_inventory(&self, book_id: &BookId) -> AttributeBag {
        self.respond(Resource::Inventory, book_id).await
    }

    async fn fetch_reviews(&self, book_id: &BookId) -> AttributeBag {
        self.respond(Resource::Reviews, book_id).await
    }

    async fn list_books(&self) -> Vec<BookSummary> {
        Vec::new()
    }
}

#[async_trait]
impl RecommendationSource for ScriptedSource {
    async fn fetch_recommendations(&self, book_id: &BookId, user_id: &UserId) -> AttributeBag {
        self.respond(Resource::Recommendations, book_id)
            .await
            .with("user_id", user_id.as_str())
    }
}
