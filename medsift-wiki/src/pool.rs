//! Candidate pool construction
//!
//! Invoked once per run, on the first symptom: search for articles whose
//! text mentions it, fetch each article, and attach whatever the infobox
//! extraction yields. The search hit is trusted as evidence: a page whose
//! infobox omits the symptom (or has no infobox at all) still enters the
//! pool with an empty symptom list.

use medsift_core::{extract_symptoms, Candidate, ExtractParams};
use tracing::{info, warn};

use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::search::SearchClient;

/// Build the initial candidate pool for `symptom`.
///
/// A failed search fails the build; a failed page fetch is logged and skips
/// that page only. The result may be empty, which the caller treats as a
/// terminal condition.
pub async fn build_pool(
    search: &SearchClient,
    fetcher: &PageFetcher,
    params: &ExtractParams,
    symptom: &str,
    limit: u32,
) -> Result<Vec<Candidate>> {
    let titles = search.search_pages(symptom, limit).await?;

    let mut pool = Vec::with_capacity(titles.len());
    for title in titles {
        let html = match fetcher.fetch_page(&title).await {
            Ok(html) => html,
            Err(err) => {
                warn!(title = %title, error = %err, "skipping page");
                continue;
            }
        };
        let symptoms = extract_symptoms(&html, params);
        pool.push(Candidate::new(title, symptoms));
    }

    info!(symptom = %symptom, candidates = pool.len(), "pool built");
    Ok(pool)
}
