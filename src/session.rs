use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use derive_new::new;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipelines::fake_news::Bucket;

/// One classification result, immutable once created. Its position in the
/// ledger is its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct ClassificationRecord {
    /// The article title as classified
    pub title: String,

    /// The article body as classified
    pub body: String,

    /// The raw model score
    pub probability: f32,

    /// The threshold bucket derived from the score
    pub bucket: Bucket,
}

impl ClassificationRecord {
    /// The percentage shown to the user for this record
    pub fn displayed_percentage(&self) -> f32 {
        self.bucket.displayed_percentage(self.probability)
    }

    /// The full result line, e.g.
    /// `Highly Likely to be Fake News (95.00% probability)`
    pub fn result_text(&self) -> String {
        format!(
            "{} ({:.2}% probability)",
            self.bucket.label(),
            self.displayed_percentage()
        )
    }
}

/// Running counts of fake and real classifications, derived from the ledger
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Tally {
    /// Records in one of the fake buckets
    pub fake: u64,

    /// Records in one of the real buckets
    pub real: u64,
}

impl Tally {
    /// The total number of classifications counted
    pub fn total(&self) -> u64 {
        self.fake + self.real
    }

    /// Returns true if nothing has been classified yet
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One running session: the append-only ledger of classification results and
/// the tally derived from it.
///
/// A session lives exactly as long as the frontend that owns it. There is no
/// persistence and no clear operation; the ledger is emptied only by dropping
/// the session.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<ClassificationRecord>,
    tally: Tally,
}

impl Session {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished record to the ledger and bump the matching tally
    /// counter. Only the classification pipeline appends.
    pub(crate) fn append(&mut self, record: ClassificationRecord) -> &ClassificationRecord {
        if record.bucket.is_fake() {
            self.tally.fake += 1;
        } else {
            self.tally.real += 1;
        }

        self.records.push(record);

        self.records.last().expect("the ledger cannot be empty after a push")
    }

    /// The ledger, in insertion order
    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    /// The current tally
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// The number of records in the ledger
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been classified yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the full ledger to a CSV file. The ledger is not mutated.
    pub fn export_csv(&self, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path).map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        self.write_csv(file)
    }

    /// Write the full ledger as CSV: a header row followed by one row per
    /// record in insertion order.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv.write_record(["title", "text", "result", "probability"])?;

        for record in &self.records {
            csv.serialize(Row {
                title: &record.title,
                text: &record.body,
                result: record.result_text(),
                probability: record.probability,
            })?;
        }

        csv.flush()?;

        Ok(())
    }
}

/// One exported CSV row
#[derive(Serialize)]
struct Row<'a> {
    title: &'a str,
    text: &'a str,
    result: String,
    probability: f32,
}

/// Export Error
#[derive(Error, Debug)]
pub enum ExportError {
    /// The destination could not be created
    #[error("unable to create {path}: {source}")]
    Create {
        /// The chosen destination
        path: PathBuf,

        /// The underlying failure
        source: io::Error,
    },

    /// A row could not be written
    #[error("unable to write a CSV row: {0}")]
    Write(#[from] csv::Error),

    /// The destination could not be flushed
    #[error("unable to finish the CSV: {0}")]
    Flush(#[from] io::Error),
}
