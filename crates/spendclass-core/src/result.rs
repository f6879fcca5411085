//! Inference result structures and the serialized report format.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// A candidate label presented to the classification engine.
///
/// `text` is unique among the candidates of one inference call — the label
/// builder enforces this, so the text alone is enough to recover the
/// category id from classifier output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLabel {
    pub text: String,
    pub category_id: CategoryId,
}

/// One candidate scored by the classification engine.
///
/// The engine returns these in arbitrary order; nothing downstream may rely
/// on the order or on the scores summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLabel {
    pub text: String,
    pub score: f32,
}

/// A category match ranked by confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub category_id: CategoryId,
    pub label: String,
    pub score: f32,
}

/// Final result of one inference call.
///
/// `matches` is sorted by score descending, ties broken by ascending
/// category id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    /// The original transaction description.
    pub query: String,
    pub matches: Vec<RankedMatch>,
}

impl InferenceResult {
    /// Wire-format report: label/id pairs and scores share index position,
    /// descending by score.
    pub fn report(&self) -> InferenceReport {
        InferenceReport {
            sequence: self.query.clone(),
            labels: self
                .matches
                .iter()
                .map(|m| LabelEntry {
                    label: m.label.clone(),
                    id: m.category_id,
                })
                .collect(),
            scores: self.matches.iter().map(|m| m.score).collect(),
        }
    }
}

/// The serialized output printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// The original query text.
    pub sequence: String,
    pub labels: Vec<LabelEntry>,
    /// Index-aligned with `labels`.
    pub scores: Vec<f32>,
}

/// One label/id pair in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    pub id: CategoryId,
}
