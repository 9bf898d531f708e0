use std::{
    env,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{models::PooledScorer, tokenizer::Vocabulary};

/// The serialized pretrained scorer, relative to the application directory
pub static MODEL_FILE: &str = "fakenewsdetector.json";

/// The serialized pre-fitted vocabulary, relative to the application directory
pub static VOCABULARY_FILE: &str = "tokenizer.json";

/// Resolve the application base directory when no explicit override is given:
/// the directory of the running executable when it holds the model artifact
/// (the packaged layout), otherwise the current directory (the development
/// layout).
pub fn base_dir() -> Result<PathBuf, StartupError> {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            if dir.join(MODEL_FILE).exists() {
                return Ok(dir.to_path_buf());
            }
        }
    }

    env::current_dir().map_err(StartupError::BaseDir)
}

/// Load the pretrained scorer from the application directory
pub fn load_scorer(dir: &Path) -> Result<PooledScorer, StartupError> {
    load_json(&dir.join(MODEL_FILE))
}

/// Load the pre-fitted vocabulary from the application directory
pub fn load_vocabulary(dir: &Path) -> Result<Vocabulary, StartupError> {
    load_json(&dir.join(VOCABULARY_FILE))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StartupError> {
    debug!("Loading artifact from {}", path.display());

    let file = File::open(path).map_err(|err| StartupError::Missing {
        path: path.to_path_buf(),
        source: err,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|err| StartupError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Startup Error. These are fatal: nothing interactive may start after one.
#[derive(Error, Debug)]
pub enum StartupError {
    /// An artifact file could not be opened
    #[error("unable to read the artifact at {path}: {source}")]
    Missing {
        /// The expected artifact location
        path: PathBuf,

        /// The underlying failure
        source: io::Error,
    },

    /// An artifact file did not deserialize
    #[error("malformed artifact at {path}: {source}")]
    Malformed {
        /// The artifact location
        path: PathBuf,

        /// The underlying failure
        source: serde_json::Error,
    },

    /// No application directory could be resolved
    #[error("unable to resolve the application directory: {0}")]
    BaseDir(io::Error),
}
