//! Re-associating scored labels with category ids and ranking them.

use std::cmp::Ordering;
use std::collections::HashSet;

use spendclass_core::{RankedMatch, ScoredLabel};

use crate::{CandidateSet, InferenceError};

/// Map each scored label back to its category and sort into the final
/// ranking.
///
/// The engine's ordering is not trusted: results are sorted by score
/// descending, ties broken by ascending category id so equal-score runs are
/// reproducible. The engine promised a permutation of the candidate set, so
/// a returned text with no reverse-map entry, a repeated text, a count
/// mismatch, or a non-finite score all fail with
/// [`InferenceError::Reconciliation`] — never silently dropped or guessed.
///
/// `top_k = None` keeps every match; `Some(k)` truncates after sorting.
pub fn reconcile(
    scored: Vec<ScoredLabel>,
    candidates: &CandidateSet,
    top_k: Option<usize>,
) -> Result<Vec<RankedMatch>, InferenceError> {
    if scored.len() != candidates.len() {
        return Err(contract_violation(format!(
            "engine returned {} labels for {} candidates",
            scored.len(),
            candidates.len()
        )));
    }

    let mut seen = HashSet::with_capacity(scored.len());
    let mut matches = Vec::with_capacity(scored.len());

    for ScoredLabel { text, score } in scored {
        let Some(category_id) = candidates.resolve(&text) else {
            return Err(contract_violation(format!(
                "engine returned label {text:?} outside the candidate set"
            )));
        };
        if !seen.insert(category_id) {
            return Err(contract_violation(format!(
                "engine returned label {text:?} more than once"
            )));
        }
        if !score.is_finite() {
            return Err(contract_violation(format!(
                "non-finite score {score} for label {text:?}"
            )));
        }
        matches.push(RankedMatch {
            category_id,
            label: text,
            score,
        });
    }

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });

    if let Some(k) = top_k {
        matches.truncate(k);
    }

    Ok(matches)
}

fn contract_violation(detail: String) -> InferenceError {
    InferenceError::Reconciliation { detail }
}
