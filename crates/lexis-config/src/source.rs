use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/consupalabrahoy-cloud/vocabulariogriego/main/output_diccionario.json";

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Raw URL of the dictionary JSON document
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        let url = env::var("LEXIS_SOURCE_URL").unwrap_or_else(|_| default_url());

        let timeout_secs = env::var("LEXIS_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self { url, timeout_secs }
    }
}
