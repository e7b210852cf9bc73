//! Wikipedia full-text search client
//!
//! Wraps `action=query&list=search` of the MediaWiki API. Hits are returned
//! in the API's relevance order; only the titles are used downstream.

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::WikiConfig;
use crate::error::{Result, WikiError};

/// Response envelope for `action=query&list=search`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

/// One search hit; fields beyond the title are ignored.
#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

impl SearchResponse {
    fn into_titles(self) -> Vec<String> {
        self.query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default()
    }
}

/// Full-text search client for the MediaWiki API.
pub struct SearchClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl SearchClient {
    pub fn new(config: &WikiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| WikiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
        })
    }

    /// Titles of up to `limit` main-namespace articles whose full text
    /// mentions `query`, in relevance order. A response without a result
    /// block is an empty result, not an error.
    pub async fn search_pages(&self, query: &str, limit: u32) -> Result<Vec<String>> {
        let limit = limit.to_string();
        debug!(query = %query, limit = %limit, "querying search API");

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("srnamespace", "0"),
                ("srlimit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::Api(status.as_u16(), body));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| WikiError::Parse(e.to_string()))?;

        let titles = body.into_titles();
        info!(query = %query, hits = titles.len(), "search complete");
        Ok(titles)
    }
}
