//! Symptom extraction from article infoboxes
//!
//! Real encyclopedia infoboxes are inconsistently marked up: some carry a
//! clean `<li>` list in the Symptoms cell, others a comma-joined prose blob.
//! Tier 1 reads the structured list; tier 2 is a punctuation-split safety
//! net that runs only when tier 1 comes up short. Extraction never fails:
//! any markup miss yields an empty list, which downstream treats as
//! "unknown", not as an error.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::normalize::normalize;
use crate::params::ExtractParams;

static INFOBOX: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.infobox").expect("infobox selector"));
static HEADER: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("th selector"));
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").expect("li selector"));

/// Label the symptom row is found by. A rendering heuristic, not a schema
/// guarantee: rows without it simply yield nothing.
const SYMPTOMS_LABEL: &str = "Symptoms";

/// Extract the normalized, deduplicated symptom list from one article's HTML.
///
/// Returns first-occurrence order; every kept string is lower-case with
/// length inside the configured bounds. Worst case is an empty vector.
pub fn extract_symptoms(html: &str, params: &ExtractParams) -> Vec<String> {
    let document = Html::parse_document(html);

    let Some(cell) = symptoms_cell(&document) else {
        return Vec::new();
    };

    let mut items = Vec::new();

    // Tier 1: well-formed list markup inside the value cell.
    for li in cell.select(&LIST_ITEM) {
        let text: String = li.text().collect();
        let cleaned = normalize(&text);
        if params.length_ok(&cleaned) {
            items.push(cleaned.to_lowercase());
        }
    }

    // Tier 2: punctuation-split fallback for prose-style cells. Re-splits the
    // whole cell text, not just what tier 1 missed; overlap is resolved by
    // the final dedup.
    if items.len() < params.fallback_threshold {
        debug!(tier1 = items.len(), "structured extraction short, splitting cell text");
        let raw = cell.text().collect::<Vec<_>>().join(";");
        for part in raw.split([';', ',']) {
            let cleaned = normalize(part);
            if params.length_ok(&cleaned) && !params.is_boilerplate(&cleaned) {
                items.push(cleaned.to_lowercase());
            }
        }
    }

    dedup_first_occurrence(items)
}

/// The value cell of the infobox row whose header mentions the symptoms
/// label: first matching `th`, then its next `td` sibling.
fn symptoms_cell(document: &Html) -> Option<ElementRef<'_>> {
    let infobox = document.select(&INFOBOX).next()?;
    let header = infobox
        .select(&HEADER)
        .find(|th| th.text().collect::<String>().contains(SYMPTOMS_LABEL))?;
    next_sibling_cell(header)
}

/// Next sibling element named `td`, skipping text nodes and other elements.
fn next_sibling_cell(header: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut sibling = header.next_sibling();
    while let Some(node) = sibling {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "td" {
                return Some(element);
            }
        }
        sibling = node.next_sibling();
    }
    None
}

/// Explicit insertion-order-preserving set construction.
fn dedup_first_occurrence(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
