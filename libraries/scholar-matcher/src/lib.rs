//! Scholar Match Matcher
//!
//! Pairs students' stated interests with research opportunity descriptions.
//!
//! # Architecture
//!
//! - `fuzzy`: Partial-ratio similarity scoring (`PartialRatio`)
//! - `matcher`: Full students × opportunities scan with a fixed threshold
//!
//! Scoring sits behind [`scholar_core::SimilarityScorer`], so the algorithm
//! can be swapped without touching the scan.

pub mod fuzzy;
pub mod matcher;

pub use fuzzy::PartialRatio;
pub use matcher::{run, MatchReport, Matcher, MATCH_THRESHOLD};
