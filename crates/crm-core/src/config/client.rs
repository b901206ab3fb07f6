//! Settings for the HTTP client used by page controllers.

use serde::{Deserialize, Serialize};

/// Client-side gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the CRM API, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// Initial page size for data tables. One of 10, 25, 50, 100.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_timeout(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_page_size() -> usize {
    10
}
