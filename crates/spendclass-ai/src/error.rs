//! Error taxonomy for the inference pipeline.

use spendclass_core::CategoryId;
use spendclass_store::StoreError;
use thiserror::Error;

/// Failure while initializing or invoking the classification engine.
///
/// Fatal for the inference call; never retried.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The engine could not be initialized, e.g. model files missing.
    #[error("engine initialisation failed: {0}")]
    Init(String),

    #[error("classification failed: {0}")]
    Inference(String),

    /// An engine-enforced deadline elapsed before scoring finished.
    #[error("classification timed out")]
    Timeout,

    #[cfg(feature = "onnx")]
    #[error("onnx runtime error: {0}")]
    Onnx(#[from] ort::Error),
}

/// Any failure of the category inference pipeline.
///
/// Each stage's error is terminal for that call; no stage retries.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The category source was unreachable or its query failed.
    #[error("category store error: {0}")]
    Storage(#[from] StoreError),

    /// Two distinct categories produced identical candidate text.
    ///
    /// This is a data-entry problem to be fixed at the source; the pipeline
    /// refuses to guess which category a returned label would belong to.
    #[error("categories {first} and {second} both produce candidate label {text:?}")]
    DuplicateLabel {
        text: String,
        first: CategoryId,
        second: CategoryId,
    },

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// The engine violated its output contract.
    #[error("cannot reconcile classifier output: {detail}")]
    Reconciliation { detail: String },
}
