use thiserror::Error;

/// Pooled logistic scorer
pub mod pooled;

pub use pooled::PooledScorer;

/// A trait for pretrained models that can score a prepared token sequence
pub trait Scorer: Send + Sync {
    /// Score one padded sequence, returning the model's confidence in `[0, 1]`
    /// that the text is fake
    fn score(&self, sequence: &[u32]) -> Result<f32, ScoreError>;
}

/// Scorer Error
#[derive(Error, Debug)]
pub enum ScoreError {
    /// The sequence carried a token id the model has no weight for
    #[error("token id {id} is outside the model's {len}-entry weight table")]
    TokenOutOfRange {
        /// The offending token id
        id: u32,

        /// The size of the model's weight table
        len: usize,
    },

    /// The model backend failed
    #[error("model failure: {0}")]
    Model(String),
}
