use derive_new::new;
use log::debug;
use thiserror::Error;

use crate::{
    models::{ScoreError, Scorer},
    session::{ClassificationRecord, Session},
    tokenizer::{sequence, Vocabulary},
};

/// Threshold bucketing
pub mod bucket;

pub use bucket::Bucket;

/// The unique string token that identifies this pipeline
pub static PIPELINE: &str = "fake-news";

/// The fake news classification pipeline: a pre-fitted vocabulary, a
/// pretrained scorer, and the threshold bucketing policy.
///
/// Both members are loaded once at startup and only read afterwards, so one
/// classifier can be shared by every caller for the life of the process.
#[derive(new)]
pub struct Classifier<S: Scorer> {
    /// The pre-fitted vocabulary
    vocabulary: Vocabulary,

    /// The pretrained scorer
    scorer: S,
}

impl<S: Scorer> Classifier<S> {
    /// Prepare the fixed-length model input for an article
    pub fn prepare(&self, title: &str, body: &str) -> Vec<u32> {
        let text = format!("{} {}", title, body);

        sequence::pad(self.vocabulary.tokenize(&text))
    }

    /// Classify one article and record the result in the session.
    ///
    /// On success exactly one record is appended to the ledger and exactly one
    /// tally counter is incremented. On any failure the session is left
    /// untouched; nothing is appended until the record is fully built.
    pub fn classify<'s>(
        &self,
        session: &'s mut Session,
        title: &str,
        body: &str,
    ) -> Result<&'s ClassificationRecord, ClassifyError> {
        let title = title.trim();
        let body = body.trim();

        if title.is_empty() || body.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        debug!("Starting classification for {:?}", title);

        let sequence = self.prepare(title, body);
        let probability = self.scorer.score(&sequence)?;

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(ClassifyError::InvalidProbability(probability));
        }

        let record = ClassificationRecord::new(
            title.to_string(),
            body.to_string(),
            probability,
            Bucket::from_probability(probability),
        );

        debug!("Classified {:?}: {}", title, record.result_text());

        Ok(session.append(record))
    }
}

/// Classification Error
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The title or body was empty or whitespace-only
    #[error("both a title and article text are required")]
    EmptyInput,

    /// The scorer was unavailable or failed
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoreError),

    /// The scorer returned something that is not a probability
    #[error("scorer returned {0}, which is not a probability in [0, 1]")]
    InvalidProbability(f32),
}
