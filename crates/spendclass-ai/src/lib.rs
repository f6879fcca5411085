//! Category inference: candidate label construction, zero-shot scoring, and
//! reconciliation of classifier output back to stable category ids.

mod error;
pub use error::{ClassificationError, InferenceError};

mod engine;
pub use engine::ClassificationEngine;

mod label;
pub use label::CandidateSet;

mod reconcile;
pub use reconcile::reconcile;

mod pipeline;
pub use pipeline::{infer, infer_top_k};

#[cfg(feature = "onnx")]
mod zeroshot;
#[cfg(feature = "onnx")]
pub use zeroshot::ZeroShotClassifier;
