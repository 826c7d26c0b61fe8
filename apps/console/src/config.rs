//! Client configuration loaded from environment variables.

use std::env;

/// Base URL used when `API_URL` is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
