//! Infobox text cleanup
//!
//! Encyclopedia infobox cells carry citation markers (`[3]`,
//! `[citation needed]`) and editorial cross-references (`(see also ...)`)
//! inline with the actual content. Symptom matching is exact-string, so both
//! kinds of noise have to go before a fragment can be compared or displayed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bracketed citation markers and parenthetical notes containing "see".
/// Both alternatives are non-greedy so adjacent markers are removed
/// independently rather than as one span.
static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[.*?\]|\(.*?see.*?\)").expect("noise pattern"));

/// Characters trimmed from both ends of a cleaned fragment.
const BOUNDARY: &[char] = &[' ', '.', '\n', '\t', ';'];

/// Strip citation markers and "see" notes, then trim boundary punctuation.
///
/// Stripping repeats until no match remains, so noise exposed by an earlier
/// removal is stripped too. Pure and total: a string with nothing to strip
/// passes through unchanged, and `normalize(normalize(x)) == normalize(x)`
/// for any input.
///
/// Does not lower-case; callers decide when case is folded (the extractor
/// folds on keep, so length bounds apply to the cleaned original text).
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    while NOISE.is_match(&text) {
        text = NOISE.replace_all(&text, "").into_owned();
    }
    text.trim_matches(|c: char| BOUNDARY.contains(&c)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_citation_markers() {
        assert_eq!(normalize("fever[1]"), "fever");
        assert_eq!(normalize("fever[citation needed] and chills[2][3]"), "fever and chills");
    }

    #[test]
    fn strips_see_notes_case_insensitive() {
        assert_eq!(normalize("rash (see also measles)"), "rash");
        assert_eq!(normalize("rash (See symptoms below)"), "rash");
        assert_eq!(normalize("rash (SEE main article)"), "rash");
    }

    #[test]
    fn keeps_ordinary_parentheticals() {
        assert_eq!(normalize("loss of smell (anosmia)"), "loss of smell (anosmia)");
    }

    #[test]
    fn strips_noise_exposed_by_removal() {
        // the citation splits the word "see"; removing it uncovers a see-note
        assert_eq!(normalize("rash (s[1]ee below)"), "rash");
    }

    #[test]
    fn trims_boundary_punctuation() {
        assert_eq!(normalize("  fever.\n"), "fever");
        assert_eq!(normalize(";\theadache; "), "headache");
    }

    #[test]
    fn no_op_on_clean_text() {
        assert_eq!(normalize("dry cough"), "dry cough");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn idempotent() {
        let cases = [
            "fever[1]",
            "rash (see also measles)",
            "rash (s[1]ee below)",
            "  mixed [2] noise (see note).  ",
            "[a][b]c",
            "[[nested] brackets]",
            "(x) (see y)",
            "plain text",
            "",
        ];
        for case in cases {
            let once = normalize(case);
            assert_eq!(normalize(&once), once, "not idempotent for {case:?}");
        }
    }
}
