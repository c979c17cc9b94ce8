//! In-memory catalog implementing the book data lookups
//!
//! Read-only after construction, so any number of concurrent lookups proceed
//! without contending on a lock. An optional per-resource sleep stands in for
//! the latency of a remote store.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use shared::{AttributeBag, BookId, BookSummary, Resource};

use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::BookDataSource;

pub const METADATA_FAILED: &str = "Failed to fetch book metadata";
pub const PRICING_FAILED: &str = "Failed to fetch pricing information";
pub const INVENTORY_FAILED: &str = "Failed to fetch inventory information";
pub const REVIEWS_FAILED: &str = "Failed to fetch reviews";

/// One book with every sub-resource the store knows about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: String,
    pub description: String,
    #[serde(default)]
    pub pricing: Option<PricingRecord>,
    #[serde(default)]
    pub inventory: Option<InventoryRecord>,
    #[serde(default)]
    pub reviews: Option<ReviewsRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub discount: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub promotion: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub in_stock: bool,
    pub quantity: i64,
    pub warehouse: String,
    pub shipping_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsRecord {
    pub average_rating: f64,
    pub total_reviews: i64,
    pub recent_review: String,
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}

impl CatalogRecord {
    fn metadata_bag(&self) -> AttributeBag {
        AttributeBag::new()
            .with("title", self.title.as_str())
            .with("author", self.author.as_str())
            .with("isbn", self.isbn.as_str())
            .with("publish_date", self.publish_date.as_str())
            .with("description", self.description.as_str())
    }

    fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            price: self.pricing.as_ref().map_or(0.0, |p| p.price),
        }
    }
}

impl PricingRecord {
    fn bag(&self) -> AttributeBag {
        AttributeBag::new()
            .with("price", self.price)
            .with("currency", self.currency.as_str())
            .with("discount", self.discount)
            .with("sale_price", self.sale_price)
            .with("promotion", self.promotion.as_str())
    }
}

impl InventoryRecord {
    fn bag(&self) -> AttributeBag {
        AttributeBag::new()
            .with("in_stock", self.in_stock)
            .with("quantity", self.quantity)
            .with("warehouse", self.warehouse.as_str())
            .with("shipping_time", self.shipping_time.as_str())
    }
}

impl ReviewsRecord {
    fn bag(&self) -> AttributeBag {
        let breakdown = AttributeBag::new()
            .with("5_star", self.five_star)
            .with("4_star", self.four_star)
            .with("3_star", self.three_star)
            .with("2_star", self.two_star)
            .with("1_star", self.one_star);

        AttributeBag::new()
            .with("average_rating", self.average_rating)
            .with("total_reviews", self.total_reviews)
            .with("recent_review", self.recent_review.as_str())
            .with("rating_breakdown", breakdown)
    }
}

/// Simulated latency applied before each lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub metadata: Duration,
    pub pricing: Duration,
    pub inventory: Duration,
    pub reviews: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            metadata: Duration::from_millis(80),
            pricing: Duration::from_millis(120),
            inventory: Duration::from_millis(150),
            reviews: Duration::from_millis(100),
        }
    }
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        Self {
            metadata: delay,
            pricing: delay,
            inventory: delay,
            reviews: delay,
        }
    }

    pub fn delay_for(&self, resource: Resource) -> Duration {
        match resource {
            Resource::Metadata => self.metadata,
            Resource::Pricing => self.pricing,
            Resource::Inventory => self.inventory,
            Resource::Reviews => self.reviews,
            Resource::Recommendations => Duration::ZERO,
        }
    }
}

/// Catalog store serving lookups from memory
#[derive(Debug, Clone)]
pub struct CatalogStore {
    books: Arc<BTreeMap<String, CatalogRecord>>,
    latency: LatencyProfile,
}

impl CatalogStore {
    /// Build a store from records, rejecting duplicate ids
    pub fn new(records: Vec<CatalogRecord>, latency: LatencyProfile) -> OrchestratorResult<Self> {
        let mut books = BTreeMap::new();
        for record in records {
            if record.id.trim().is_empty() {
                return Err(OrchestratorError::Config {
                    message: format!("catalog record '{}' has an empty id", record.title),
                });
            }
            if let Some(previous) = books.insert(record.id.clone(), record) {
                return Err(OrchestratorError::Config {
                    message: format!("duplicate catalog id '{}'", previous.id),
                });
            }
        }

        Ok(Self {
            books: Arc::new(books),
            latency,
        })
    }

    /// Store holding the built-in four-book catalog
    pub fn seeded(latency: LatencyProfile) -> Self {
        let books = seed_records()
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            books: Arc::new(books),
            latency,
        }
    }

    /// Load records from a JSON array on disk
    pub fn from_json_file(path: impl AsRef<Path>, latency: LatencyProfile) -> OrchestratorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| OrchestratorError::CatalogLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&text).map_err(|e| OrchestratorError::CatalogLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::new(records, latency)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    async fn simulate(&self, resource: Resource) {
        let delay = self.latency.delay_for(resource);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn record(&self, book_id: &BookId) -> Option<&CatalogRecord> {
        self.books.get(book_id.as_str())
    }

    fn missing(resource: Resource, book_id: &BookId, message: &str) -> AttributeBag {
        warn!(%resource, %book_id, "Error fetching book {} for ID {}", resource, book_id);
        AttributeBag::error(message)
    }
}

#[async_trait]
impl BookDataSource for CatalogStore {
    async fn fetch_metadata(&self, book_id: &BookId) -> AttributeBag {
        self.simulate(Resource::Metadata).await;
        match self.record(book_id) {
            Some(record) => record.metadata_bag(),
            None => Self::missing(Resource::Metadata, book_id, METADATA_FAILED),
        }
    }

    async fn fetch_pricing(&self, book_id: &BookId) -> AttributeBag {
        self.simulate(Resource::Pricing).await;
        match self.record(book_id).and_then(|r| r.pricing.as_ref()) {
            Some(pricing) => pricing.bag(),
            None => Self::missing(Resource::Pricing, book_id, PRICING_FAILED),
        }
    }

    async fn fetch_inventory(&self, book_id: &BookId) -> AttributeBag {
        self.simulate(Resource::Inventory).await;
        match self.record(book_id).and_then(|r| r.inventory.as_ref()) {
            Some(inventory) => inventory.bag(),
            None => Self::missing(Resource::Inventory, book_id, INVENTORY_FAILED),
        }
    }

    async fn fetch_reviews(&self, book_id: &BookId) -> AttributeBag {
        self.simulate(Resource::Reviews).await;
        match self.record(book_id).and_then(|r| r.reviews.as_ref()) {
            Some(reviews) => reviews.bag(),
            None => Self::missing(Resource::Reviews, book_id, REVIEWS_FAILED),
        }
    }

    async fn list_books(&self) -> Vec<BookSummary> {
        self.books.values().map(CatalogRecord::summary).collect()
    }
}

/// The built-in catalog
pub fn seed_records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord {
            id: "1".to_string(),
            title: "The Go Programming Language".to_string(),
            author: "Alan Donovan".to_string(),
            isbn: "978-0134190440".to_string(),
            publish_date: "2015-11-16".to_string(),
            description: "The authoritative resource to writing clear and idiomatic Go".to_string(),
            pricing: Some(PricingRecord {
                price: 39.99,
                currency: default_currency(),
                discount: 0.10,
                sale_price: 35.99,
                promotion: "Holiday Sale".to_string(),
            }),
            inventory: Some(InventoryRecord {
                in_stock: true,
                quantity: 42,
                warehouse: "East Coast DC".to_string(),
                shipping_time: "2-3 business days".to_string(),
            }),
            reviews: Some(ReviewsRecord {
                average_rating: 4.5,
                total_reviews: 89,
                recent_review: "Essential reading for Go developers".to_string(),
                five_star: 45,
                four_star: 28,
                three_star: 12,
                two_star: 3,
                one_star: 1,
            }),
        },
        CatalogRecord {
            id: "2".to_string(),
            title: "Clean Code".to_string(),
            author: "Robert Martin".to_string(),
            isbn: "978-0132350884".to_string(),
            publish_date: "2008-08-11".to_string(),
            description: "A handbook of agile software craftsmanship".to_string(),
            pricing: Some(PricingRecord {
                price: 32.50,
                currency: default_currency(),
                discount: 0.05,
                sale_price: 30.88,
                promotion: "Member Discount".to_string(),
            }),
            inventory: Some(InventoryRecord {
                in_stock: true,
                quantity: 38,
                warehouse: "Central DC".to_string(),
                shipping_time: "1-2 business days".to_string(),
            }),
            reviews: Some(ReviewsRecord {
                average_rating: 4.3,
                total_reviews: 127,
                recent_review: "Changed how I think about writing code".to_string(),
                five_star: 65,
                four_star: 32,
                three_star: 20,
                two_star: 7,
                one_star: 3,
            }),
        },
        CatalogRecord {
            id: "3".to_string(),
            title: "System Design Interview".to_string(),
            author: "Alex Xu".to_string(),
            isbn: "978-1736049112".to_string(),
            publish_date: "2020-06-04".to_string(),
            description: "An insider's guide to system design interviews".to_string(),
            pricing: Some(PricingRecord {
                price: 28.95,
                currency: default_currency(),
                discount: 0.0,
                sale_price: 28.95,
                promotion: String::new(),
            }),
            inventory: Some(InventoryRecord {
                in_stock: true,
                quantity: 15,
                warehouse: "West Coast DC".to_string(),
                shipping_time: "3-4 business days".to_string(),
            }),
            reviews: Some(ReviewsRecord {
                average_rating: 4.7,
                total_reviews: 56,
                recent_review: "Incredibly helpful for interview prep".to_string(),
                five_star: 38,
                four_star: 14,
                three_star: 3,
                two_star: 1,
                one_star: 0,
            }),
        },
        CatalogRecord {
            id: "4".to_string(),
            title: "Dopamine Nation".to_string(),
            author: "Anna Lembke".to_string(),
            isbn: "978-1524746728".to_string(),
            publish_date: "2021-08-24".to_string(),
            description: "Finding balance in the age of indulgence".to_string(),
            pricing: Some(PricingRecord {
                price: 20.00,
                currency: default_currency(),
                discount: 0.15,
                sale_price: 17.00,
                promotion: "Limited Time".to_string(),
            }),
            inventory: Some(InventoryRecord {
                in_stock: false,
                quantity: 0,
                warehouse: "Back Order".to_string(),
                shipping_time: "2-3 weeks".to_string(),
            }),
            reviews: Some(ReviewsRecord {
                average_rating: 4.1,
                total_reviews: 94,
                recent_review: "Eye-opening perspective on modern life".to_string(),
                five_star: 42,
                four_star: 31,
                three_star: 15,
                two_star: 4,
                one_star: 2,
            }),
        },
    ]
}
