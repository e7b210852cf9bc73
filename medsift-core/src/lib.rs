//! # medsift core library
//!
//! Pure narrowing logic shared by the medsift crates:
//! - Text normalization for infobox fragments
//! - Symptom extraction from article HTML
//! - The candidate narrowing engine (selection state, filtering, checklist,
//!   termination)
//! - Tunable extraction heuristics
//!
//! Nothing in this crate performs I/O; the Wikipedia collaborators live in
//! `medsift-wiki` and the interactive loop in `medsift-cli`.

pub mod engine;
pub mod extract;
pub mod normalize;
pub mod params;
pub mod types;

pub use engine::{resolve_token, NarrowingEngine, TokenError};
pub use extract::extract_symptoms;
pub use normalize::normalize;
pub use params::ExtractParams;
pub use types::{Candidate, Outcome, Step};
