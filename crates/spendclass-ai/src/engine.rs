//! Classification engine contract.

use spendclass_core::ScoredLabel;

use crate::ClassificationError;

/// A black-box text classifier scoring a query against candidate labels.
///
/// Implementations must return a permutation of `candidates`, each paired
/// with a confidence in `[0, 1]`. Callers may not assume any particular
/// order, nor that the scores sum to 1. Any implementation honouring this
/// contract is substitutable — tests use a deterministic stub, production
/// uses the ONNX zero-shot engine.
pub trait ClassificationEngine {
    fn score(
        &mut self,
        query: &str,
        candidates: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassificationError>;
}
