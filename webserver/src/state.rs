//! Webserver state shared with every handler

use std::time::Instant;

use orchestrator::Aggregator;

/// Core webserver state
pub struct WebServerState {
    pub aggregator: Aggregator,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
