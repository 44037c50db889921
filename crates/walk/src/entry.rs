use std::path::{Path, PathBuf};

/// Effective type of a traversed entry.
///
/// Symlinks are classified by their target so callers see the type that
/// reading the entry would produce; whether a symlinked directory is also
/// descended into is a separate walker option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A directory, or a symlink resolving to one.
    Directory,
    /// A regular file, or a symlink resolving to one.
    File,
    /// Anything else: sockets, FIFOs, broken symlinks.
    Other,
}

/// One step of a traversal.
#[derive(Clone, Debug)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) relative: PathBuf,
    pub(crate) kind: EntryKind,
}

impl WalkEntry {
    /// Absolute path of the entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the traversal root; empty for the root itself.
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Effective entry type.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for the traversal root entry.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.relative.as_os_str().is_empty()
    }
}
