//! Core data model for candidate narrowing

/// One disease candidate, built once from a single article and never
/// mutated afterwards; the engine retains or drops whole candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Article title; unique within one pool.
    pub name: String,
    /// Extracted symptom list, normalized and deduplicated in first-occurrence
    /// order. Empty means "unknown", not "asymptomatic"; such candidates are
    /// never excluded by a filter.
    pub symptoms: Vec<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, symptoms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            symptoms,
        }
    }

    /// Exact-string membership test against the extracted symptom list.
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }
}

/// Report from one accepted engine transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Pool seeded from the first symptom's search results.
    Seeded { candidates: usize },
    /// Pool filtered by a new symptom.
    Narrowed { remaining: usize },
    /// Symptom was already selected; state unchanged.
    Duplicate,
    /// The transition emptied the pool; the run is over.
    Exhausted { reason: String },
}

/// Terminal result of a narrowing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one candidate survived.
    Diagnosed(String),
    /// Multiple candidates survive with no discriminating symptom left.
    Ambiguous(Vec<String>),
    /// The pool emptied; no valid diagnosis.
    Exhausted(String),
}
