//! Wikipedia collaborators for medsift
//!
//! The external half of the system: full-text search over article content,
//! article fetching with an on-disk HTML cache, and candidate pool
//! construction on top of both. The narrowing engine in `medsift-core`
//! never talks to these directly; the pool is built once, on the first
//! symptom, and handed over.

pub mod config;
pub mod error;
pub mod fetch;
pub mod pool;
pub mod search;

pub use config::WikiConfig;
pub use error::{Result, WikiError};
pub use fetch::PageFetcher;
pub use pool::build_pool;
pub use search::SearchClient;
