//! One-shot category inference: store → candidate labels → engine → ranking.

use spendclass_core::InferenceResult;
use spendclass_store::CategorySource;
use tracing::debug;

use crate::{CandidateSet, ClassificationEngine, InferenceError, reconcile::reconcile};

/// Run one inference call over the full category set.
pub fn infer(
    query: &str,
    source: &dyn CategorySource,
    engine: &mut dyn ClassificationEngine,
) -> Result<InferenceResult, InferenceError> {
    infer_top_k(query, source, engine, None)
}

/// Run one inference call, keeping only the `top_k` best matches when given.
///
/// Stages run once each, in order; the first failing stage is terminal for
/// the call. An empty category set short-circuits to an empty result without
/// invoking the engine — there is nothing to classify against, and that is
/// not an error.
pub fn infer_top_k(
    query: &str,
    source: &dyn CategorySource,
    engine: &mut dyn ClassificationEngine,
    top_k: Option<usize>,
) -> Result<InferenceResult, InferenceError> {
    debug!(query, "loading categories");
    let categories = source.list_categories()?;
    if categories.is_empty() {
        debug!("category set is empty, skipping classification");
        return Ok(InferenceResult {
            query: query.to_string(),
            matches: Vec::new(),
        });
    }

    debug!(count = categories.len(), "building candidate labels");
    let candidates = CandidateSet::build(&categories)?;

    debug!(candidates = candidates.len(), "classifying");
    let scored = engine.score(query, &candidates.texts())?;

    debug!(scored = scored.len(), "reconciling");
    let matches = reconcile(scored, &candidates, top_k)?;

    Ok(InferenceResult {
        query: query.to_string(),
        matches,
    })
}
