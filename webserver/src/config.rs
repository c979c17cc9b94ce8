//! Command line and environment configuration

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use shared::messages::config::DEFAULT_RECOMMENDATIONS_URL;
use shared::ServerConfig;

use crate::error::WebServerResult;

/// Command line arguments, each also readable from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Book details service aggregating catalog lookups sequentially or concurrently")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "BOOKSTORE_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the HTTP server
    #[arg(long, env = "BOOKSTORE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BOOKSTORE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// JSON catalog file served instead of the built-in books
    #[arg(long, env = "BOOKSTORE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Answer lookups immediately instead of sleeping like a remote store
    #[arg(long, env = "BOOKSTORE_NO_LATENCY")]
    pub no_simulated_latency: bool,

    /// Endpoint queried for the recommendations slot
    #[arg(long, env = "BOOKSTORE_RECOMMENDATIONS_URL", default_value = DEFAULT_RECOMMENDATIONS_URL)]
    pub recommendations_url: String,

    /// Bound every lookup by this many milliseconds
    #[arg(long, env = "BOOKSTORE_FETCH_DEADLINE_MS")]
    pub fetch_deadline_ms: Option<u64>,
}

impl Args {
    /// Convert into a validated server configuration
    pub fn into_config(self) -> WebServerResult<ServerConfig> {
        let config = ServerConfig {
            host: self.host,
            port: self.port,
            log_level: self.log_level,
            catalog_path: self.catalog,
            simulated_latency: !self.no_simulated_latency,
            recommendations_url: self.recommendations_url,
            fetch_deadline_ms: self.fetch_deadline_ms,
        };
        config.validate()?;
        Ok(config)
    }
}
