//! Extraction heuristic parameters
//!
//! Infobox markup in the wild is inconsistent, so extraction leans on tuned
//! thresholds rather than schema guarantees. Each value here encodes a
//! heuristic, not domain law; all of them can be overridden from the
//! `[extract]` section of the config file.

use serde::Deserialize;

/// Tunable knobs for symptom extraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Minimum symptom length in characters after cleanup.
    ///
    /// Valid range: >= 1
    /// Default: 3
    /// Shorter fragments are markup debris (stray glyphs, list bullets).
    pub min_len: usize,

    /// Maximum symptom length in characters after cleanup.
    ///
    /// Default: 60
    /// Longer fragments are prose sentences, not symptom phrases.
    pub max_len: usize,

    /// Tier-1 result count below which the punctuation-split fallback runs.
    ///
    /// Default: 4
    /// Guards against under-extraction from poorly structured cells; a
    /// well-formed list of 4+ items is trusted as complete.
    pub fallback_threshold: usize,

    /// Editorial hedge-phrase prefixes, matched case-insensitively.
    ///
    /// A fallback fragment starting with one of these is an editorial
    /// qualifier ("some cases ..."), not a symptom, and is dropped.
    pub boilerplate_prefixes: Vec<String>,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 60,
            fallback_threshold: 4,
            boilerplate_prefixes: vec![
                "some cases".to_string(),
                "recurring".to_string(),
                "latent".to_string(),
            ],
        }
    }
}

impl ExtractParams {
    /// Length-in-bounds check for a cleaned fragment.
    pub fn length_ok(&self, text: &str) -> bool {
        let len = text.chars().count();
        len >= self.min_len && len <= self.max_len
    }

    /// True when the fragment starts with a boilerplate prefix.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.boilerplate_prefixes
            .iter()
            .any(|prefix| lower.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let params = ExtractParams::default();
        assert!(!params.length_ok("no"));
        assert!(params.length_ok("flu"));
        assert!(params.length_ok(&"x".repeat(60)));
        assert!(!params.length_ok(&"x".repeat(61)));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let params = ExtractParams::default();
        // 60 two-byte characters: in bounds by chars, far over by bytes
        assert!(params.length_ok(&"é".repeat(60)));
    }

    #[test]
    fn boilerplate_is_case_insensitive_prefix_match() {
        let params = ExtractParams::default();
        assert!(params.is_boilerplate("some cases show nothing"));
        assert!(params.is_boilerplate("Recurring fever"));
        assert!(params.is_boilerplate("LATENT period"));
        assert!(!params.is_boilerplate("fever, recurring"));
    }
}
