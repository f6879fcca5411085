//! Zero-shot classification with ONNX Runtime.
//!
//! Scores a query against candidate labels without per-category training
//! examples, NLI-style: the query is the premise and each candidate becomes
//! the hypothesis "This example is {candidate}.". The entailment logits are
//! softmaxed across candidates to produce one confidence per label. The
//! model directory must contain `model.onnx` and `tokenizer.json` from a
//! sequence-pair NLI checkpoint (e.g. bart-large-mnli).

use std::path::Path;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::info;

use spendclass_core::ScoredLabel;

use crate::{ClassificationEngine, ClassificationError};

/// Hypothesis wrapped around each candidate label.
const HYPOTHESIS_TEMPLATE: &str = "This example is {}.";

/// Position of the entailment logit in MNLI output
/// (contradiction, neutral, entailment).
const ENTAILMENT_INDEX: usize = 2;

/// Premise/hypothesis pairs are short; well under typical NLI model limits.
const MAX_LENGTH: usize = 256;

/// Zero-shot classifier backed by an NLI model exported to ONNX.
///
/// The model graph must take `input_ids` and `attention_mask` and emit
/// per-pair NLI logits as its first output.
pub struct ZeroShotClassifier {
    session: Session,
    tokenizer: Tokenizer,
}

impl ZeroShotClassifier {
    /// Load the model from a directory containing `model.onnx` and
    /// `tokenizer.json`.
    pub fn load(model_dir: &Path) -> Result<Self, ClassificationError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(ClassificationError::Init(format!(
                "model.onnx not found in {}",
                model_dir.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(ClassificationError::Init(format!(
                "tokenizer.json not found in {}",
                model_dir.display()
            )));
        }

        let session = Session::builder()?.commit_from_file(&model_path)?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassificationError::Init(format!("load tokenizer: {e}")))?;

        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| ClassificationError::Init(format!("set truncation: {e}")))?;

        // Pad all pairs in a batch to the same length.
        tokenizer.with_padding(Some(tokenizers::PaddingParams {
            ..Default::default()
        }));

        info!(model = %model_path.display(), "loaded zero-shot model");
        Ok(Self { session, tokenizer })
    }
}

impl ClassificationEngine for ZeroShotClassifier {
    fn score(
        &mut self,
        query: &str,
        candidates: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassificationError> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        let batch_size = candidates.len();

        // One premise/hypothesis pair per candidate, encoded as one batch.
        let pairs: Vec<(String, String)> = candidates
            .iter()
            .map(|c| (query.to_string(), hypothesis(c)))
            .collect();
        let encodings = self
            .tokenizer
            .encode_batch(pairs, true)
            .map_err(|e| ClassificationError::Inference(format!("tokenize: {e}")))?;

        let seq_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);

        // Flat input tensors: [batch_size, seq_len].
        let mut input_ids = vec![0i64; batch_size * seq_len];
        let mut attention_mask = vec![0i64; batch_size * seq_len];

        for (i, encoding) in encodings.iter().enumerate() {
            let offset = i * seq_len;
            for (j, &id) in encoding.get_ids().iter().enumerate() {
                input_ids[offset + j] = id as i64;
            }
            for (j, &mask) in encoding.get_attention_mask().iter().enumerate() {
                attention_mask[offset + j] = mask as i64;
            }
        }

        let shape = [batch_size as i64, seq_len as i64];
        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))?;

        let outputs = self.session.run(ort::inputs![
            "input_ids" => ids_tensor,
            "attention_mask" => mask_tensor,
        ])?;

        // NLI logits: [batch_size, num_classes].
        let (output_shape, output_data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        if dims.len() != 2
            || dims[0] as usize != batch_size
            || (dims[1] as usize) <= ENTAILMENT_INDEX
        {
            return Err(ClassificationError::Inference(format!(
                "unexpected logits shape: {dims:?}, expected [{batch_size}, >= 3]"
            )));
        }

        let num_classes = dims[1] as usize;
        let entailment: Vec<f32> = (0..batch_size)
            .map(|i| output_data[i * num_classes + ENTAILMENT_INDEX])
            .collect();

        // Softmax across candidates: single-label zero-shot scores.
        let scores = softmax(&entailment);

        Ok(candidates
            .iter()
            .zip(scores)
            .map(|(text, score)| ScoredLabel {
                text: text.clone(),
                score,
            })
            .collect())
    }
}

/// Hypothesis text for a candidate label.
fn hypothesis(label: &str) -> String {
    HYPOTHESIS_TEMPLATE.replace("{}", label)
}

/// Numerically stable softmax.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hypothesis_wraps_the_label() {
        assert_eq!(
            hypothesis("Travel, flights/hotels"),
            "This example is Travel, flights/hotels."
        );
    }

    #[test]
    fn softmax_sums_to_one() {
        let scores = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "expected unit sum, got {sum}");
    }

    #[test]
    fn softmax_preserves_ordering() {
        let scores = softmax(&[0.2, 3.1, -1.0]);
        assert!(scores[1] > scores[0]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn softmax_is_shift_invariant() {
        let a = softmax(&[1.0, 2.0]);
        let b = softmax(&[101.0, 102.0]);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-6);
        }
    }
}
