use thiserror::Error;

/// Fake News Classification
pub mod fake_news;

/// Available Pipelines
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Pipeline {
    /// Fake News Classification
    FakeNews,
}

impl Pipeline {
    /// Get the unique string token that identifies this pipeline
    pub fn as_str(&self) -> &str {
        match self {
            Pipeline::FakeNews => fake_news::PIPELINE,
        }
    }
}

impl TryFrom<String> for Pipeline {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == fake_news::PIPELINE {
            Ok(Pipeline::FakeNews)
        } else {
            Err(PipelineError::Unknown(value))
        }
    }
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline Error
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No pipeline found for the given string
    #[error("no pipeline found for {0}")]
    Unknown(String),
}
