//! CLI support for esq
//!
//! Exposes the command implementations so they can be driven from tests or
//! embedded in other tools without going through argument parsing.

mod docs;
mod normalize;
mod zone;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use normalize::{NormalizeOptions, execute_normalize};
pub use zone::execute_tz;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input did not normalize
    #[error("Invalid document: {0}")]
    Normalize(#[from] crate::NormalizeError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe a document to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'esq docs' to see available categories.")]
    UnknownCategory(String),
}
