//! Client configuration

/// Default API root, matching the server's default port and `/api` prefix
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Client configuration for connecting to the reporting API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root including the `/api` prefix (e.g., "http://localhost:3000/api")
    pub api_base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout: 30,
        }
    }

    /// Read `APRE_API_BASE_URL` and `APRE_API_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::new(
            get("APRE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        );
        if let Some(timeout) = get("APRE_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout = timeout;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
