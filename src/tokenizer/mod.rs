use std::collections::{HashMap, HashSet};

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Sequence padding
pub mod sequence;

lazy_static::lazy_static! {
    /// Characters stripped before splitting, matching the filter set the
    /// vocabulary was fitted with (punctuation plus tab and newline; note that
    /// apostrophes are kept).
    static ref FILTERS: HashSet<char> =
        "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n".chars().collect();
}

/// A pre-fitted word-to-id mapping, loaded once at startup and immutable for
/// the rest of the process lifetime.
///
/// Unknown words map to the reserved out-of-vocabulary id when the fitted
/// artifact carries one, and are dropped otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct Vocabulary {
    /// Word to integer id
    index: HashMap<String, u32>,

    /// Reserved id for out-of-vocabulary words, if the fit assigned one
    #[serde(default)]
    oov_id: Option<u32>,
}

impl Vocabulary {
    /// Return the id for a single known word
    pub fn id(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    /// Return the number of known words
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Return true if no words are known
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Convert raw text into a sequence of integer ids
    pub fn tokenize(&self, text: &str) -> Vec<u32> {
        let normalized = normalize(text);

        normalized
            .split_whitespace()
            .filter_map(|word| self.id(word).or(self.oov_id))
            .collect()
    }
}

/// Lowercase the text and blank out the filter characters
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if FILTERS.contains(&c) { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}
