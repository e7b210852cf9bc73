//! Candidate narrowing state machine
//!
//! Holds the symptoms committed so far and the surviving candidate pool.
//! Seeding happens once, from the first symptom's search results; every
//! later symptom only filters the existing pool in memory. Candidates with
//! an empty symptom list are retained by every filter.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::types::{Candidate, Outcome, Step};

/// Errors local to a single input token; the round continues past them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Numeric token outside the current checklist range.
    #[error("invalid checklist number: {0}")]
    InvalidIndex(String),
}

/// State for one narrowing run.
///
/// The pool shrinks monotonically after seeding: each filter replaces
/// `remaining` with a subset of itself, and `selected` only ever grows.
#[derive(Debug, Default)]
pub struct NarrowingEngine {
    selected: Vec<String>,
    remaining: Vec<Candidate>,
}

impl NarrowingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symptoms committed so far, in submission order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Surviving candidates.
    pub fn remaining(&self) -> &[Candidate] {
        &self.remaining
    }

    /// True once the first symptom has seeded the pool.
    pub fn is_seeded(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Seed transition: adopt the pool built for the first symptom.
    ///
    /// The pool comes from the search collaborator and is trusted as-is;
    /// an empty pool ends the run since no later symptom can repopulate it.
    pub fn seed(&mut self, symptom: &str, pool: Vec<Candidate>) -> Step {
        debug_assert!(!self.is_seeded(), "seed called twice");
        self.selected.push(symptom.to_string());
        self.remaining = pool;
        if self.remaining.is_empty() {
            Step::Exhausted {
                reason: format!("no candidates found mentioning: {symptom}"),
            }
        } else {
            Step::Seeded {
                candidates: self.remaining.len(),
            }
        }
    }

    /// Filter transition: keep candidates that list the symptom or whose
    /// symptom data is unknown. Re-submitting a selected symptom is a no-op.
    pub fn submit(&mut self, symptom: &str) -> Step {
        if self.selected.iter().any(|s| s == symptom) {
            return Step::Duplicate;
        }
        self.selected.push(symptom.to_string());
        self.remaining
            .retain(|c| c.symptoms.is_empty() || c.has_symptom(symptom));
        if self.remaining.is_empty() {
            Step::Exhausted {
                reason: format!("no candidates match all of: {}", self.selected.join(", ")),
            }
        } else {
            Step::Narrowed {
                remaining: self.remaining.len(),
            }
        }
    }

    /// The discriminating question set: symptoms some surviving candidate
    /// exhibits that have not been selected yet, lexicographically sorted.
    /// Recomputed every round; checklist numbering is only valid within one
    /// round.
    pub fn checklist(&self) -> Vec<String> {
        let mut unseen = BTreeSet::new();
        for candidate in &self.remaining {
            for symptom in &candidate.symptoms {
                if !self.selected.iter().any(|s| s == symptom) {
                    unseen.insert(symptom.clone());
                }
            }
        }
        unseen.into_iter().collect()
    }

    /// Termination rules, evaluated before each prompt.
    ///
    /// A singleton pool with nothing left to ask is a diagnosis; a larger
    /// pool with nothing left to ask is an ambiguous shortlist. Exhaustion
    /// is reported at transition time, not here.
    pub fn termination(&self) -> Option<Outcome> {
        if self.selected.is_empty() || !self.checklist().is_empty() {
            return None;
        }
        match self.remaining.len() {
            0 => None,
            1 => Some(Outcome::Diagnosed(self.remaining[0].name.clone())),
            _ => Some(Outcome::Ambiguous(self.names())),
        }
    }

    /// Explicit early stop: a diagnosis if exactly one candidate remains,
    /// otherwise the current shortlist.
    pub fn conclude(&self) -> Outcome {
        if self.remaining.len() == 1 {
            Outcome::Diagnosed(self.remaining[0].name.clone())
        } else {
            Outcome::Ambiguous(self.names())
        }
    }

    fn names(&self) -> Vec<String> {
        self.remaining.iter().map(|c| c.name.clone()).collect()
    }
}

/// Interpret one input token against the current checklist.
///
/// A purely-numeric token is a 1-based checklist index, but only once a
/// selection exists and the checklist is non-empty; before that, digits
/// pass through as literal symptom text. An out-of-range index rejects
/// this token only; the caller keeps processing the rest of the batch.
pub fn resolve_token(
    token: &str,
    checklist: &[String],
    seeded: bool,
) -> Result<String, TokenError> {
    let numeric = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    if numeric && seeded && !checklist.is_empty() {
        let index: usize = token
            .parse()
            .map_err(|_| TokenError::InvalidIndex(token.to_string()))?;
        return index
            .checked_sub(1)
            .and_then(|i| checklist.get(i))
            .cloned()
            .ok_or_else(|| TokenError::InvalidIndex(token.to_string()));
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, symptoms: &[&str]) -> Candidate {
        Candidate::new(name, symptoms.iter().map(|s| s.to_string()).collect())
    }

    fn seeded_engine() -> NarrowingEngine {
        let mut engine = NarrowingEngine::new();
        engine.seed(
            "fever",
            vec![
                candidate("A", &["fever", "cough"]),
                candidate("B", &["fever", "rash"]),
                candidate("C", &[]),
            ],
        );
        engine
    }

    #[test]
    fn seed_reports_pool_size() {
        let engine = seeded_engine();
        assert_eq!(engine.selected(), ["fever"]);
        assert_eq!(engine.remaining().len(), 3);
    }

    #[test]
    fn empty_seed_exhausts() {
        let mut engine = NarrowingEngine::new();
        let step = engine.seed("fever", Vec::new());
        assert!(matches!(step, Step::Exhausted { .. }));
    }

    #[test]
    fn filter_keeps_matching_and_unknown() {
        let mut engine = seeded_engine();
        let step = engine.submit("cough");
        assert_eq!(step, Step::Narrowed { remaining: 2 });
        let names: Vec<_> = engine.remaining().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn unknown_symptom_candidate_survives_every_filter() {
        let mut engine = seeded_engine();
        engine.submit("cough");
        engine.submit("rash");
        let names: Vec<_> = engine.remaining().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C"]);
    }

    #[test]
    fn duplicate_submit_is_a_no_op() {
        let mut engine = seeded_engine();
        assert_eq!(engine.submit("fever"), Step::Duplicate);
        assert_eq!(engine.selected(), ["fever"]);
        assert_eq!(engine.remaining().len(), 3);
    }

    #[test]
    fn filter_to_empty_exhausts() {
        let mut engine = NarrowingEngine::new();
        engine.seed("fever", vec![candidate("A", &["fever", "cough"])]);
        let step = engine.submit("rash");
        assert!(matches!(step, Step::Exhausted { .. }));
        assert!(engine.remaining().is_empty());
    }

    #[test]
    fn pool_is_monotonically_non_increasing() {
        let mut engine = seeded_engine();
        let mut previous: Vec<String> =
            engine.remaining().iter().map(|c| c.name.clone()).collect();
        for symptom in ["cough", "rash", "chills"] {
            engine.submit(symptom);
            let current: Vec<String> =
                engine.remaining().iter().map(|c| c.name.clone()).collect();
            assert!(current.len() <= previous.len());
            assert!(current.iter().all(|name| previous.contains(name)));
            previous = current;
        }
    }

    #[test]
    fn checklist_is_sorted_unique_and_excludes_selected() {
        let mut engine = NarrowingEngine::new();
        engine.seed(
            "fever",
            vec![
                candidate("A", &["fever", "cough", "rash"]),
                candidate("B", &["fever", "cough", "chills"]),
            ],
        );
        assert_eq!(engine.checklist(), ["chills", "cough", "rash"]);
        engine.submit("cough");
        assert_eq!(engine.checklist(), ["chills", "rash"]);
    }

    #[test]
    fn no_termination_while_questions_remain() {
        let engine = seeded_engine();
        assert_eq!(engine.termination(), None);
    }

    #[test]
    fn singleton_with_no_questions_is_diagnosed() {
        let mut engine = NarrowingEngine::new();
        engine.seed("fever", vec![candidate("A", &["fever"])]);
        assert_eq!(
            engine.termination(),
            Some(Outcome::Diagnosed("A".to_string()))
        );
    }

    #[test]
    fn plural_with_no_questions_is_ambiguous() {
        let mut engine = NarrowingEngine::new();
        engine.seed(
            "fever",
            vec![candidate("A", &["fever"]), candidate("B", &[])],
        );
        assert_eq!(
            engine.termination(),
            Some(Outcome::Ambiguous(vec!["A".to_string(), "B".to_string()]))
        );
    }

    #[test]
    fn unseeded_engine_never_terminates() {
        let engine = NarrowingEngine::new();
        assert_eq!(engine.termination(), None);
    }

    #[test]
    fn conclude_prefers_diagnosis_for_singleton() {
        let mut engine = NarrowingEngine::new();
        engine.seed("fever", vec![candidate("A", &["fever", "cough"])]);
        assert_eq!(engine.conclude(), Outcome::Diagnosed("A".to_string()));

        let engine = seeded_engine();
        assert!(matches!(engine.conclude(), Outcome::Ambiguous(names) if names.len() == 3));
    }

    #[test]
    fn numeric_token_resolves_against_checklist() {
        let checklist = vec!["chills".to_string(), "cough".to_string()];
        assert_eq!(resolve_token("2", &checklist, true), Ok("cough".to_string()));
        assert_eq!(resolve_token("1", &checklist, true), Ok("chills".to_string()));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let checklist = vec!["chills".to_string()];
        assert_eq!(
            resolve_token("2", &checklist, true),
            Err(TokenError::InvalidIndex("2".to_string()))
        );
        assert_eq!(
            resolve_token("0", &checklist, true),
            Err(TokenError::InvalidIndex("0".to_string()))
        );
        assert_eq!(
            resolve_token("99999999999999999999", &checklist, true),
            Err(TokenError::InvalidIndex(
                "99999999999999999999".to_string()
            ))
        );
    }

    #[test]
    fn digits_before_seeding_pass_through_as_text() {
        assert_eq!(resolve_token("2", &[], false), Ok("2".to_string()));
        let checklist = vec!["chills".to_string()];
        assert_eq!(resolve_token("2", &checklist, false), Ok("2".to_string()));
    }

    #[test]
    fn free_text_passes_through_unresolved() {
        let checklist = vec!["chills".to_string()];
        assert_eq!(
            resolve_token("night sweats", &checklist, true),
            Ok("night sweats".to_string())
        );
    }
}
