use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Share of replacement characters above which content is treated as
/// binary, expressed as a divisor (one tenth).
const REPLACEMENT_DIVISOR: usize = 10;

/// Minimum content length before the replacement-character heuristic
/// applies; very short files are kept as-is.
const REPLACEMENT_MIN_LEN: usize = 100;

/// Why a readable candidate was left out of the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// The bytes are not valid UTF-8.
    NonUtf8,
    /// The decoded text is saturated with U+FFFD replacement characters,
    /// which marks a binary file that slipped past the extension check.
    ReplacementHeavy,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonUtf8 => f.write_str("content is not valid UTF-8"),
            Self::ReplacementHeavy => f.write_str("content is mostly replacement characters"),
        }
    }
}

/// Outcome of loading one candidate file.
#[derive(Debug)]
pub enum Loaded {
    /// Renderable text content.
    Text(String),
    /// The file was read but classified as non-text.
    Skipped(SkipReason),
}

/// Error reading a candidate file.
#[derive(Debug, Error)]
#[error("failed to read '{}': {source}", path.display())]
pub struct SourceError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl SourceError {
    /// Path of the unreadable candidate.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads a candidate and classifies its content.
///
/// Hard I/O failures surface as [`SourceError`]; content-level problems
/// come back as [`Loaded::Skipped`] so callers can report and move on.
pub fn load_source(path: &Path) -> Result<Loaded, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) if replacement_heavy(&text) => Ok(Loaded::Skipped(SkipReason::ReplacementHeavy)),
        Ok(text) => Ok(Loaded::Text(text)),
        Err(_) => Ok(Loaded::Skipped(SkipReason::NonUtf8)),
    }
}

fn replacement_heavy(text: &str) -> bool {
    let mut total = 0usize;
    let mut replacements = 0usize;
    for character in text.chars() {
        total += 1;
        if character == '\u{FFFD}' {
            replacements += 1;
        }
    }
    total > REPLACEMENT_MIN_LEN && replacements * REPLACEMENT_DIVISOR > total
}
