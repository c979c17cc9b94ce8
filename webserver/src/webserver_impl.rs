//! Main webserver implementation
//!
//! Wires the configured lookup sources into an aggregator and serves it over
//! HTTP until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use orchestrator::{
    Aggregator, BookDataSource, CatalogStore, FetcherSet, HttpRecommendationSource, LatencyProfile,
    RecommendationSource, WithDeadline,
};
use shared::{logging, ServerConfig};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{book_details, health_check, list_books};

/// Main webserver struct
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
    bind_address: SocketAddr,
}

impl WebServer {
    pub fn new(aggregator: Aggregator, bind_address: SocketAddr) -> Self {
        Self {
            state: Arc::new(WebServerState::new(aggregator)),
            bind_address,
        }
    }

    /// Build the catalog, recommendation client and optional deadlines from config
    pub fn from_config(config: &ServerConfig) -> WebServerResult<Self> {
        let aggregator = Aggregator::new(build_fetchers(config)?);
        Ok(Self::new(aggregator, config.bind_address()))
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/books", get(list_books))
            .route("/api/books/:id/details", get(book_details))
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e)))?;

        info!("🌐 Web server listening on http://{}", self.bind_address);
        info!("📚 Try http://{}/api/books/1/details?mode=concurrent", self.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Resolve the configured sources into a fetcher set
pub fn build_fetchers(config: &ServerConfig) -> WebServerResult<FetcherSet> {
    let latency = if config.simulated_latency {
        LatencyProfile::default()
    } else {
        LatencyProfile::none()
    };

    let store = match &config.catalog_path {
        Some(path) => CatalogStore::from_json_file(path, latency)?,
        None => CatalogStore::seeded(latency),
    };
    info!(books = store.len(), "📖 Catalog ready");

    let recommendations = HttpRecommendationSource::new(&config.recommendations_url)?;

    let (data, recommendations): (Arc<dyn BookDataSource>, Arc<dyn RecommendationSource>) =
        match config.fetch_deadline() {
            Some(deadline) => {
                info!(deadline_ms = whole_millis(deadline), "⏱️ Lookups bounded by deadline");
                (
                    Arc::new(WithDeadline::new(store, deadline)),
                    Arc::new(WithDeadline::new(recommendations, deadline)),
                )
            }
            None => (Arc::new(store), Arc::new(recommendations)),
        };

    Ok(FetcherSet::new(data, recommendations))
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => logging::log_error("Signal handling", &err),
    }
}
