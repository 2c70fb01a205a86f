//! Application State
//!
//! Shared state accessible by all API handlers. The derived subsets are
//! read-only after startup, so the state is freely cloned across async
//! tasks without synchronization.

use std::sync::Arc;
use std::time::Instant;

use crate::dataset::Subsets;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Row subsets derived once at startup.
    pub subsets: Arc<Subsets>,
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(subsets: Arc<Subsets>, config: ApiConfig) -> Self {
        Self {
            subsets,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_formatting() {
        let config = ApiConfig::new("127.0.0.1", 9090);
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }
}
