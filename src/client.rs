use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the default HTTP client for API requests
/// with settings suited to small JSON payloads
pub fn create_http_client() -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the JsonBank API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host
    pub host: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            host: "api.jsonbank.io".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme and host
    pub fn new(scheme: String, host: String) -> Self {
        Config {
            scheme,
            host,
            debug: false,
        }
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}
