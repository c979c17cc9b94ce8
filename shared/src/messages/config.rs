//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_RECOMMENDATIONS_URL: &str = "https://zenquotes.io/api/random";

/// Web server configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// JSON catalog to serve instead of the built-in seed
    pub catalog_path: Option<PathBuf>,
    /// Sleep before each lookup to mimic a remote store
    pub simulated_latency: bool,
    pub recommendations_url: String,
    /// Per-lookup deadline; `None` leaves lookups unbounded
    pub fetch_deadline_ms: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            log_level: "info".to_string(),
            catalog_path: None,
            simulated_latency: true,
            recommendations_url: DEFAULT_RECOMMENDATIONS_URL.to_string(),
            fetch_deadline_ms: None,
        }
    }
}

impl ServerConfig {
    /// Reject values the server cannot start with
    pub fn validate(&self) -> SharedResult<()> {
        if self.port == 0 {
            return Err(SharedError::InvalidConfig {
                field: "port".to_string(),
                value: self.port.to_string(),
            });
        }
        if self.fetch_deadline_ms == Some(0) {
            return Err(SharedError::InvalidConfig {
                field: "fetch_deadline_ms".to_string(),
                value: "0".to_string(),
            });
        }
        if !self.recommendations_url.starts_with("http://") && !self.recommendations_url.starts_with("https://") {
            return Err(SharedError::InvalidConfig {
                field: "recommendations_url".to_string(),
                value: self.recommendations_url.clone(),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn fetch_deadline(&self) -> Option<Duration> {
        self.fetch_deadline_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:8080".parse().unwrap());
        assert!(config.fetch_deadline().is_none());
    }

    #[test]
    fn test_rejects_zero_port_and_deadline() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SharedError::InvalidConfig { ref field, .. }) if field == "port"
        ));

        let config = ServerConfig {
            fetch_deadline_ms: Some(0),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_http_recommendations_url() {
        let config = ServerConfig {
            recommendations_url: "ftp://quotes".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deadline_conversion() {
        let config = ServerConfig {
            fetch_deadline_ms: Some(250),
            ..ServerConfig::default()
        };
        assert_eq!(config.fetch_deadline(), Some(Duration::from_millis(250)));
    }
}
