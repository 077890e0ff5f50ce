use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("dex/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Remote data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout. None waits indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| default_base_url());

        let user_agent = env::var("POKEAPI_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let timeout_seconds = env::var("POKEAPI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            base_url,
            user_agent,
            timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}
