//! Collaborator configuration
//!
//! Explicit configuration handed to the clients at construction time.
//! Nothing here is global or mutable after startup; tests and the CLI both
//! build a `WikiConfig` and pass it down.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";
const DEFAULT_PAGE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints, identity, and cache location for the Wikipedia clients.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// MediaWiki API endpoint used for full-text search.
    pub api_url: String,
    /// Base URL articles are fetched from; the underscored title is appended.
    pub page_base_url: String,
    /// Directory fetched article HTML is cached in.
    pub cache_dir: PathBuf,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl WikiConfig {
    /// English-Wikipedia defaults with the given cache directory.
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_base_url: DEFAULT_PAGE_BASE_URL.to_string(),
            cache_dir,
            user_agent: concat!("medsift/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
