//! Parse-then-reprint normalization of assembled document text.
//!
//! Fragments are plain text until they reach the root, so this is where a
//! broken composition first shows up. The `try_*` functions report it as a
//! [`NormalizeError`]; [`compact`] and [`pretty`] panic instead, which is the
//! failure mode callers of the root constructor rely on.

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    convert::from_json,
    output::{to_json, to_json_pretty},
    value::Value,
};

/// Assembled text did not parse as a structured document.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("malformed document at line {line}, column {column}: {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for NormalizeError {
    fn from(source: serde_json::Error) -> Self {
        NormalizeError::Malformed {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Parses document text into a [`Value`] tree.
///
/// When an object repeats a key, the last occurrence wins.
pub fn parse(text: &str) -> Result<Value, NormalizeError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(json))
}

/// Re-emits `text` with no insignificant whitespace and sorted keys.
pub fn try_compact(text: &str) -> Result<String, NormalizeError> {
    trace!(len = text.len(), "compacting document");
    let value = parse(text).inspect_err(|e| debug!(error = %e, "compaction failed"))?;
    Ok(to_json(&value))
}

/// Re-emits `text` indented by two spaces per level with sorted keys.
pub fn try_pretty(text: &str) -> Result<String, NormalizeError> {
    trace!(len = text.len(), "pretty-printing document");
    let value = parse(text).inspect_err(|e| debug!(error = %e, "pretty-printing failed"))?;
    Ok(to_json_pretty(&value))
}

/// Compacting normalizer.
///
/// # Panics
///
/// Panics when `text` is not a well-formed document.
pub fn compact(text: &str) -> String {
    match try_compact(text) {
        Ok(s) => s,
        Err(e) => panic!("{e}"),
    }
}

/// Indenting normalizer.
///
/// # Panics
///
/// Panics when `text` is not a well-formed document.
pub fn pretty(text: &str) -> String {
    match try_pretty(text) {
        Ok(s) => s,
        Err(e) => panic!("{e}"),
    }
}
