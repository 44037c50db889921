use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rule::Rule;

/// Name of the per-directory rule file.
pub const RULE_FILE_NAME: &str = ".gitignore";

/// Parses rule-file text into its ordered rule list.
///
/// Blank lines and `#` comments drop out; everything else becomes a rule,
/// preserving line order.
#[must_use]
pub fn parse_rules(contents: &str) -> Vec<Rule> {
    contents.lines().filter_map(Rule::parse).collect()
}

/// Reads and parses one rule file.
///
/// A missing file is the normal case and yields an empty list. Any other
/// read failure (permissions, undecodable bytes) is reported as
/// [`RuleFileError`] so the caller can surface a diagnostic; the engine
/// treats such files as empty and continues.
pub fn read_rules(path: &Path) -> Result<Vec<Rule>, RuleFileError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse_rules(&contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(error) => Err(RuleFileError {
            path: path.to_path_buf(),
            source: error,
        }),
    }
}

/// Error produced when an existing rule file cannot be read.
#[derive(Debug, Error)]
#[error("failed to read rule file '{}': {source}", path.display())]
pub struct RuleFileError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl RuleFileError {
    /// Path of the offending rule file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
