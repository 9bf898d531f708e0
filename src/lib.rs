//! # IntegriNews
//!
//! The classification core behind the IntegriNews fake-news checker: a
//! pre-fitted vocabulary, a pretrained scorer, a threshold bucketing policy,
//! and an append-only session ledger with CSV export.
#![forbid(unsafe_code)]

/// Startup loading of the model and vocabulary artifacts
pub mod artifacts;

/// Document text extraction
pub mod extract;

/// Scorer models
pub mod models;

/// Pipelines
pub mod pipelines;

/// Session ledger and tally
pub mod session;

/// Tokenization and sequence preparation
pub mod tokenizer;
