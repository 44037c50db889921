use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operation that failed during traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkOp {
    /// Resolving the traversal root.
    Root,
    /// Reading a directory's entries.
    ReadDir,
    /// Querying an entry's metadata.
    Metadata,
    /// Canonicalizing a directory before descent.
    Canonicalize,
}

impl fmt::Display for WalkOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("resolve traversal root"),
            Self::ReadDir => f.write_str("read directory"),
            Self::Metadata => f.write_str("query metadata"),
            Self::Canonicalize => f.write_str("canonicalize directory"),
        }
    }
}

/// Error describing one failed traversal step.
///
/// The walker reports the error for the affected entry and continues with
/// its siblings; receiving a `WalkError` does not end the iteration.
#[derive(Debug)]
pub struct WalkError {
    op: WalkOp,
    path: PathBuf,
    source: io::Error,
}

impl WalkError {
    pub(crate) fn new(op: WalkOp, path: PathBuf, source: io::Error) -> Self {
        Self { op, path, source }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn op(&self) -> WalkOp {
        self.op
    }

    /// The path the operation was applied to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} '{}': {}",
            self.op,
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
