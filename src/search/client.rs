//! Client for the remote poem classification service.
//!
//! Every search is a JSON POST of `{"query": ...}` to one of three
//! endpoints; the service answers with a list of poem records, each
//! carrying its emotion vector.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::results::poem::PoemRecord;
use crate::search::config::SearchConfig;
use crate::utils::http::request_with_retry;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SearchError {
    /// Network-level failure after retries were exhausted.
    Network(String),
    /// Non-success HTTP status from the service.
    Status(u16),
    /// Response body was not a valid poem record list.
    InvalidResponse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "Search request failed: {}", msg),
            SearchError::Status(code) => write!(f, "Search service returned status {}", code),
            SearchError::InvalidResponse(msg) => {
                write!(f, "Search service returned invalid data: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ── Search Kinds ───────────────────────────────────────

/// What the query string means, and therefore which endpoint handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Title,
    Author,
    /// Free-text classification. Shares the classifier endpoint until the
    /// service grows a dedicated emotion search.
    Emotion,
}

impl SearchKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchKind::Title => "/find_by_title",
            SearchKind::Author => "/find_by_author",
            SearchKind::Emotion => "/classify_poem",
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

// ── Client ─────────────────────────────────────────────

pub struct SearchClient {
    http: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client build should not fail");
        Self { http, config }
    }

    /// POST a query and parse the resulting poem records.
    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
    ) -> Result<Vec<PoemRecord>, SearchError> {
        let url = format!("{}{}", self.config.base_url, kind.endpoint());
        tracing::debug!(%url, ?kind, "searching poems");

        let response = request_with_retry(
            || {
                self.http
                    .post(&url)
                    .json(&SearchRequest { query })
                    .send()
            },
            self.config.max_retries,
        )
        .await
        .map_err(SearchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<PoemRecord>>()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }
}
