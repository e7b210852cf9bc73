//! Error types for the Wikipedia collaborators

use thiserror::Error;

/// Result type for collaborator operations.
pub type Result<T> = std::result::Result<T, WikiError>;

/// Wikipedia collaborator errors.
///
/// A search failure is fatal to pool construction; a per-page failure is
/// caught in `build_pool` and skips that page only.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("cache error: {0}")]
    Cache(#[from] std::io::Error),
}
