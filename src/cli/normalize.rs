//! Normalize document text supplied on the command line or stdin

use tracing::debug;

use super::CliError;
use crate::{try_compact, try_pretty};

/// Options for the normalize command
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Document text
    pub input: Option<String>,
    /// Indent the output instead of compacting it
    pub pretty: bool,
}

/// Execute a normalize operation, returning the canonical text
pub fn execute_normalize(options: &NormalizeOptions) -> Result<String, CliError> {
    let text = options.input.as_deref().ok_or(CliError::NoInput)?;
    if text.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    debug!(pretty = options.pretty, len = text.len(), "normalizing input");
    let output = if options.pretty {
        try_pretty(text)?
    } else {
        try_compact(text)?
    };
    Ok(output)
}
