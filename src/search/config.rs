//! Search client configuration — persisted to disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::load_json_config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the poem classification service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries on network errors / 429 / 5xx.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://poems-backend-fbe3c465d5f2.herokuapp.com".to_string(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

/// Load config from disk, falling back to defaults.
pub fn load_config(path: &Path) -> SearchConfig {
    load_json_config(path, "Search")
}
