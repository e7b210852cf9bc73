//! Article fetching with an on-disk HTML cache
//!
//! Each article is cached as one flat file keyed by its underscored title,
//! written after the first successful fetch and read back verbatim on every
//! later run. The cache has no expiry; delete the directory to refetch.
//! Callers see only `fetch_page`; the cache is this collaborator's own
//! concern.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::config::WikiConfig;
use crate::error::{Result, WikiError};

/// Fetches article HTML, caching each page on disk.
pub struct PageFetcher {
    http_client: reqwest::Client,
    page_base_url: String,
    cache_dir: PathBuf,
}

impl PageFetcher {
    /// Builds the fetcher and creates its cache directory.
    pub fn new(config: &WikiConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.cache_dir)?;

        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| WikiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            page_base_url: config.page_base_url.clone(),
            cache_dir: config.cache_dir.clone(),
        })
    }

    /// Article HTML for `title`, from cache when present. Idempotent.
    pub async fn fetch_page(&self, title: &str) -> Result<String> {
        let file_name = cache_file_name(title);
        let path = self.cache_dir.join(&file_name);

        if let Ok(html) = fs::read_to_string(&path).await {
            debug!(title = %title, "cache hit");
            return Ok(html);
        }

        let url = format!("{}{}", self.page_base_url, file_name);
        debug!(title = %title, url = %url, "fetching article");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Api(status.as_u16(), title.to_string()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        fs::write(&path, &html).await?;
        Ok(html)
    }
}

/// Cache key and URL tail: underscored title with an `.html` suffix.
fn cache_file_name(title: &str) -> String {
    format!("{}.html", title.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> WikiConfig {
        WikiConfig::new(dir.to_path_buf())
    }

    #[test]
    fn cache_file_names_use_underscores() {
        assert_eq!(cache_file_name("Common cold"), "Common_cold.html");
        assert_eq!(cache_file_name("Influenza"), "Influenza.html");
    }

    #[test]
    fn new_creates_cache_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("pages");
        PageFetcher::new(&config(&cache_dir)).unwrap();
        assert!(cache_dir.is_dir());
    }

    #[tokio::test]
    async fn cached_page_is_served_without_network() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Common_cold.html"), "<html>cold</html>").unwrap();

        // unroutable base URL: any network attempt would error out
        let mut config = config(dir.path());
        config.page_base_url = "http://127.0.0.1:1/wiki/".to_string();

        let fetcher = PageFetcher::new(&config).unwrap();
        let html = fetcher.fetch_page("Common cold").await.unwrap();
        assert_eq!(html, "<html>cold</html>");
    }

    #[tokio::test]
    async fn uncached_page_failure_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.page_base_url = "http://127.0.0.1:1/wiki/".to_string();
        config.timeout = std::time::Duration::from_millis(250);

        let fetcher = PageFetcher::new(&config).unwrap();
        let result = fetcher.fetch_page("Common cold").await;
        assert!(matches!(result, Err(WikiError::Network(_))));
    }
}
