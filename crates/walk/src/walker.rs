use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::entry::{EntryKind, WalkEntry};
use crate::error::{WalkError, WalkOp};

/// Configures a traversal rooted at one path.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    follow_symlinks: bool,
}

impl WalkBuilder {
    /// Creates a builder for a traversal rooted at `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
        }
    }

    /// Configures whether symlinked directories are descended into.
    ///
    /// Symlinks to regular files are always classified as [`EntryKind::File`]
    /// and yielded; this option only affects directory descent.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Resolves the root and builds a [`Walker`].
    ///
    /// The root is canonicalized up front so every yielded absolute path and
    /// every visited-set entry refers to resolved locations.
    pub fn build(self) -> Result<Walker, WalkError> {
        let root = fs::canonicalize(&self.root)
            .map_err(|error| WalkError::new(WalkOp::Root, self.root.clone(), error))?;
        Ok(Walker {
            follow_symlinks: self.follow_symlinks,
            visited: HashSet::new(),
            pending: vec![Queued {
                path: root,
                relative: PathBuf::new(),
            }],
        })
    }
}

#[derive(Debug)]
struct Queued {
    path: PathBuf,
    relative: PathBuf,
}

/// Depth-first iterator over filesystem entries.
///
/// Yields each entry in preorder: a directory appears before its contents,
/// siblings appear in lexicographic name order. Errors are yielded in place
/// of the affected entry and iteration continues.
#[derive(Debug)]
pub struct Walker {
    follow_symlinks: bool,
    visited: HashSet<PathBuf>,
    pending: Vec<Queued>,
}

impl Walker {
    /// Classifies `path`, resolving symlinks to the type of their target.
    fn classify(&self, queued: &Queued) -> Result<(EntryKind, bool), WalkError> {
        let metadata = fs::symlink_metadata(&queued.path)
            .map_err(|error| WalkError::new(WalkOp::Metadata, queued.path.clone(), error))?;
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            return Ok((EntryKind::Directory, true));
        }
        if file_type.is_file() {
            return Ok((EntryKind::File, false));
        }
        if file_type.is_symlink() {
            // Broken links classify as Other rather than erroring out.
            return Ok(match fs::metadata(&queued.path) {
                Ok(target) if target.is_dir() => (EntryKind::Directory, self.follow_symlinks),
                Ok(target) if target.is_file() => (EntryKind::File, false),
                _ => (EntryKind::Other, false),
            });
        }
        Ok((EntryKind::Other, false))
    }

    /// Queues the children of a directory, deduplicating by canonical path.
    fn enqueue_children(&mut self, queued: &Queued) -> Result<(), WalkError> {
        let canonical = fs::canonicalize(&queued.path)
            .map_err(|error| WalkError::new(WalkOp::Canonicalize, queued.path.clone(), error))?;
        if !self.visited.insert(canonical) {
            return Ok(());
        }

        let read_dir = fs::read_dir(&queued.path)
            .map_err(|error| WalkError::new(WalkOp::ReadDir, queued.path.clone(), error))?;
        let mut names = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry
                .map_err(|error| WalkError::new(WalkOp::ReadDir, queued.path.clone(), error))?;
            names.push(dir_entry.file_name());
        }
        names.sort();

        // LIFO stack: push in reverse so the smallest name is popped first.
        for name in names.into_iter().rev() {
            self.pending.push(Queued {
                path: queued.path.join(&name),
                relative: queued.relative.join(&name),
            });
        }
        Ok(())
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let queued = self.pending.pop()?;

        let (kind, descend) = match self.classify(&queued) {
            Ok(classified) => classified,
            Err(error) => return Some(Err(error)),
        };

        if descend {
            if let Err(error) = self.enqueue_children(&queued) {
                return Some(Err(error));
            }
        }

        Some(Ok(WalkEntry {
            path: queued.path,
            relative: queued.relative,
            kind,
        }))
    }
}
