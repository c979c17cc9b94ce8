//! HTTP client for the external recommendation API

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use shared::{AttrValue, AttributeBag, BookId, UserId};

use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::RecommendationSource;

pub const RECOMMENDATIONS_FAILED: &str = "Failed to fetch recommendations";
pub const RESPONSE_UNREADABLE: &str = "Failed to parse API response";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Recommendation source enriched with a quote from an external API
#[derive(Debug, Clone)]
pub struct HttpRecommendationSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRecommendationSource {
    pub fn new(endpoint: &str) -> OrchestratorResult<Self> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> OrchestratorResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| OrchestratorError::Config {
            message: format!("invalid recommendations url '{endpoint}': {e}"),
        })?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn api_source(&self) -> String {
        self.endpoint.host_str().unwrap_or("unknown").to_string()
    }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationSource {
    async fn fetch_recommendations(&self, book_id: &BookId, user_id: &UserId) -> AttributeBag {
        let response = match self.client.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, %book_id, "Error calling external API");
                return AttributeBag::error(RECOMMENDATIONS_FAILED).with("source", "external_api_failed");
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), %book_id, "External API returned an error status");
            return AttributeBag::error(RESPONSE_UNREADABLE);
        }

        let quotes: Vec<serde_json::Value> = match response.json().await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(error = %e, %book_id, "Error parsing API response");
                return AttributeBag::error(RESPONSE_UNREADABLE);
            }
        };
        debug!(count = quotes.len(), "received external quotes");

        let external_quote: Vec<AttrValue> = quotes.into_iter().map(AttrValue::from_json).collect();
        let suggestion = AttributeBag::new()
            .with("title", "Based on your reading preferences...")
            .with("source", "external_api_enriched");

        AttributeBag::new()
            .with("user_id", user_id.as_str())
            .with("book_id", book_id.as_str())
            .with("external_quote", external_quote)
            .with("recommendations", vec![AttrValue::from(suggestion)])
            .with("api_source", self.api_source())
    }
}
