//! Entrez client configuration

use serde::{Deserialize, Serialize};

use crate::error::{EntrezError, Result};

/// Default Entrez E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Tool identifier sent with every request for NCBI attribution
pub const TOOL_NAME: &str = "txc";

/// Configuration for the Entrez client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrezConfig {
    /// E-utilities base URL (no trailing slash)
    pub base_url: String,
    /// Contact email, required by NCBI for attribution
    pub email: String,
    /// Maximum number of ids requested per esearch call
    pub ret_max: u32,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum attempts per request, including the first (default: 3)
    pub max_retries: u32,
    /// Base delay between retry attempts in seconds; the actual delay is
    /// this value multiplied by the attempt number (default: 2)
    pub retry_delay_secs: u64,
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: String::new(),
            ret_max: 100_000,
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_secs: 2,
        }
    }
}

impl EntrezConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Recognized variables: `TXC_ENTREZ_URL`, `TXC_EMAIL`,
    /// `TXC_TIMEOUT_SECS`, `TXC_MAX_RETRIES`, `TXC_RETRY_DELAY_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TXC_ENTREZ_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(email) = std::env::var("TXC_EMAIL") {
            config.email = email;
        }
        if let Ok(timeout) = std::env::var("TXC_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| EntrezError::config(format!("Invalid TXC_TIMEOUT_SECS: {}", timeout)))?;
        }
        if let Ok(retries) = std::env::var("TXC_MAX_RETRIES") {
            config.max_retries = retries
                .parse()
                .map_err(|_| EntrezError::config(format!("Invalid TXC_MAX_RETRIES: {}", retries)))?;
        }
        if let Ok(delay) = std::env::var("TXC_RETRY_DELAY_SECS") {
            config.retry_delay_secs = delay.parse().map_err(|_| {
                EntrezError::config(format!("Invalid TXC_RETRY_DELAY_SECS: {}", delay))
            })?;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the esearch RetMax
    pub fn with_ret_max(mut self, ret_max: u32) -> Self {
        self.ret_max = ret_max;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the retry policy
    pub fn with_retries(mut self, max_retries: u32, retry_delay_secs: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_delay_secs = retry_delay_secs;
        self
    }
}
