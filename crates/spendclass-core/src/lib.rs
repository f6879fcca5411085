//! Core types for Spendclass: categories, scored labels, and inference results.

pub mod category;
pub mod result;

pub use category::{Category, CategoryId};
pub use result::{
    CandidateLabel, InferenceReport, InferenceResult, LabelEntry, RankedMatch, ScoredLabel,
};
