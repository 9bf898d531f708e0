use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::tokenizer::sequence::PAD_ID;

use super::{ScoreError, Scorer};

/// The exported form of the trained network: one weight per vocabulary id plus
/// a bias, mean-pooled over the real tokens and squashed through a sigmoid.
///
/// Pad ids contribute nothing, so scoring a padded sequence is equivalent to
/// scoring the unpadded one.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct PooledScorer {
    /// Per-token-id logit weights, indexed by vocabulary id
    weights: Vec<f32>,

    /// Intercept added to the pooled weight
    bias: f32,
}

impl Scorer for PooledScorer {
    fn score(&self, sequence: &[u32]) -> Result<f32, ScoreError> {
        let mut sum = 0.0_f32;
        let mut count = 0_usize;

        for &id in sequence {
            if id == PAD_ID {
                continue;
            }

            let weight = self
                .weights
                .get(id as usize)
                .ok_or(ScoreError::TokenOutOfRange {
                    id,
                    len: self.weights.len(),
                })?;

            sum += weight;
            count += 1;
        }

        let pooled = if count == 0 { 0.0 } else { sum / count as f32 };

        Ok(sigmoid(pooled + self.bias))
    }
}

/// The logistic link
fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + libm::expf(-z))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::tokenizer::sequence::pad;

    use super::*;

    fn scorer() -> PooledScorer {
        PooledScorer::new(vec![0.0, 2.0, -2.0, 4.0], 0.0)
    }

    #[test]
    fn scores_the_mean_pooled_logit() {
        let p = scorer().score(&[1, 3]).unwrap();

        // sigmoid((2 + 4) / 2)
        assert!((p - sigmoid(3.0)).abs() < 1e-6);
    }

    #[test]
    fn pad_ids_do_not_affect_the_score() {
        let unpadded = scorer().score(&[1, 2]).unwrap();
        let padded = scorer().score(&pad(vec![1, 2])).unwrap();

        assert_eq!(unpadded, padded);
    }

    #[test]
    fn an_all_pad_sequence_scores_the_bias() {
        let scorer = PooledScorer::new(vec![0.0, 1.0], -1.5);
        let p = scorer.score(&pad(vec![])).unwrap();

        assert!((p - sigmoid(-1.5)).abs() < 1e-6);
    }

    #[test]
    fn rejects_token_ids_outside_the_weight_table() {
        let err = scorer().score(&[1, 99]).unwrap_err();

        assert!(matches!(
            err,
            ScoreError::TokenOutOfRange { id: 99, len: 4 }
        ));
    }
}
