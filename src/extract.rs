use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The closed set of document kinds a frontend can upload, resolved once from
/// the file extension and dispatched with an explicit match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DocumentKind {
    /// A PDF document, extracted page by page
    Pdf,

    /// A Word document, extracted paragraph by paragraph
    Docx,

    /// A UTF-8 text file
    PlainText,

    /// Anything else; extraction yields an empty string
    Unsupported,
}

impl DocumentKind {
    /// Resolve the kind from a path's extension, ASCII case-insensitively
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Self::Pdf,
            Some(ext) if ext.eq_ignore_ascii_case("docx") => Self::Docx,
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Self::PlainText,
            _ => Self::Unsupported,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "plain text",
            Self::Unsupported => "unsupported",
        };

        write!(f, "{}", name)
    }
}

/// A trait for the collaborator that parses binary document formats.
///
/// The core only owns the dispatch and concatenation rules; the parsers
/// themselves are supplied by the frontend.
pub trait DocumentSource {
    /// Extract the text of each page of a PDF, in order
    fn pdf_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;

    /// Extract the text of each paragraph of a DOCX, in order
    fn docx_paragraphs(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// A source for frontends that bundle no document parser: plain text still
/// works, PDF and DOCX report as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDocumentSource;

impl DocumentSource for NullDocumentSource {
    fn pdf_pages(&self, _path: &Path) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Unavailable {
            kind: DocumentKind::Pdf,
        })
    }

    fn docx_paragraphs(&self, _path: &Path) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Unavailable {
            kind: DocumentKind::Docx,
        })
    }
}

/// Extract the plain text of an uploaded file.
///
/// PDF page texts are concatenated as-is; each DOCX paragraph is followed by a
/// single space; plain text files are read as UTF-8. Unsupported extensions
/// yield an empty string.
pub fn extract_text<S: DocumentSource>(path: &Path, source: &S) -> Result<String, ExtractError> {
    match DocumentKind::from_path(path) {
        DocumentKind::Pdf => Ok(source.pdf_pages(path)?.concat()),
        DocumentKind::Docx => {
            let mut text = String::new();

            for paragraph in source.docx_paragraphs(path)? {
                text.push_str(&paragraph);
                text.push(' ');
            }

            Ok(text)
        }
        DocumentKind::PlainText => fs::read_to_string(path).map_err(|err| ExtractError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
        DocumentKind::Unsupported => Ok(String::new()),
    }
}

/// Extraction Error
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be read as UTF-8 text
    #[error("unable to read {path}: {source}")]
    Read {
        /// The uploaded file
        path: PathBuf,

        /// The underlying failure
        source: io::Error,
    },

    /// No parser for this document kind is bundled with the frontend
    #[error("no {kind} parser is available in this build")]
    Unavailable {
        /// The document kind that cannot be parsed
        kind: DocumentKind,
    },

    /// The bundled parser failed on a corrupt or unreadable document
    #[error("unable to extract text from {path}: {message}")]
    Corrupt {
        /// The uploaded file
        path: PathBuf,

        /// The parser's failure message
        message: String,
    },
}
