use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use walk::{EntryKind, WalkBuilder, WalkError};

use crate::file::{self, RULE_FILE_NAME, RuleFileError};
use crate::resolver;
use crate::set::RuleSet;

/// Immutable map from resolved directory paths to their rule sets.
///
/// Built once per run, then consulted read-only for every candidate path.
/// Queries take `&self`, so a built index can be shared freely across
/// threads evaluating paths in parallel.
#[derive(Debug)]
pub struct RuleIndex {
    project_root: PathBuf,
    sets: FxHashMap<PathBuf, RuleSet>,
}

impl RuleIndex {
    /// Discovers rule files and builds the index.
    ///
    /// Convenience over [`IndexBuilder`] for callers that do not need the
    /// diagnostic channel.
    #[must_use]
    pub fn build<I>(project_root: impl Into<PathBuf>, start_paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        IndexBuilder::new(project_root)
            .start_paths(start_paths)
            .build()
    }

    /// The resolved project root the index was built for.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Rule set for `directory`, if a rule file was discovered there.
    #[must_use]
    pub fn rule_set(&self, directory: &Path) -> Option<&RuleSet> {
        self.sets.get(directory)
    }

    /// Number of directories holding a discovered rule file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if no rule file was discovered anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Decides whether `path` must be excluded.
    ///
    /// `path` must be an absolute path at or under the project root;
    /// callers are responsible for filtering out-of-root paths first. The
    /// query never mutates the index.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        resolver::resolve(self, path)
    }
}

/// Configures rule-file discovery for a [`RuleIndex`].
///
/// Discovery loads the rule file at the project root (if any), then walks
/// each start path's containing directory, bounded to the project root,
/// loading a rule file from every directory reached. Each physical rule
/// file is read at most once; overlapping start paths deduplicate on the
/// resolved directory.
#[derive(Clone, Debug)]
pub struct IndexBuilder {
    project_root: PathBuf,
    start_paths: Vec<PathBuf>,
}

impl IndexBuilder {
    /// Creates a builder for the given project root.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            start_paths: Vec::new(),
        }
    }

    /// Adds one start path (file or directory).
    #[must_use]
    pub fn start_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_paths.push(path.into());
        self
    }

    /// Adds a batch of start paths.
    #[must_use]
    pub fn start_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.start_paths.extend(paths);
        self
    }

    /// Builds the index, discarding diagnostics.
    #[must_use]
    pub fn build(self) -> RuleIndex {
        self.build_with(|_| {})
    }

    /// Builds the index, reporting non-fatal discovery problems.
    ///
    /// Nothing here aborts the build: unreadable rule files index as empty
    /// sets, unreadable directories are skipped, unresolvable start paths
    /// are dropped. Each problem is handed to `observe` exactly once.
    pub fn build_with<F>(self, mut observe: F) -> RuleIndex
    where
        F: FnMut(IndexDiagnostic),
    {
        let project_root = fs::canonicalize(&self.project_root).unwrap_or(self.project_root);
        let mut sets = FxHashMap::default();
        let mut visited: FxHashSet<PathBuf> = FxHashSet::default();

        visited.insert(project_root.clone());
        load_directory(&mut sets, &project_root, &mut observe);

        for start in self.start_paths {
            let resolved = match fs::canonicalize(&start) {
                Ok(resolved) => resolved,
                Err(source) => {
                    observe(IndexDiagnostic::UnresolvedStartPath {
                        path: start,
                        source,
                    });
                    continue;
                }
            };
            let walk_root = if resolved.is_dir() {
                resolved
            } else {
                match resolved.parent() {
                    Some(parent) => parent.to_path_buf(),
                    None => continue,
                }
            };
            if !walk_root.starts_with(&project_root) {
                observe(IndexDiagnostic::StartPathOutsideRoot { path: walk_root });
                continue;
            }

            let walker = match WalkBuilder::new(&walk_root).build() {
                Ok(walker) => walker,
                Err(error) => {
                    observe(IndexDiagnostic::Walk(error));
                    continue;
                }
            };
            for item in walker {
                match item {
                    Ok(entry) if entry.kind() == EntryKind::Directory => {
                        // Index keys are resolved paths; a symlink alias of
                        // an already-visited directory must not introduce a
                        // second key for the same physical rule file.
                        let resolved = fs::canonicalize(entry.path())
                            .unwrap_or_else(|_| entry.path().to_path_buf());
                        if visited.insert(resolved.clone()) {
                            load_directory(&mut sets, &resolved, &mut observe);
                        }
                    }
                    Ok(_) => {}
                    Err(error) => observe(IndexDiagnostic::Walk(error)),
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            directories = sets.len(),
            root = %project_root.display(),
            "rule index built"
        );

        RuleIndex { project_root, sets }
    }
}

fn load_directory<F>(sets: &mut FxHashMap<PathBuf, RuleSet>, directory: &Path, observe: &mut F)
where
    F: FnMut(IndexDiagnostic),
{
    let rule_path = directory.join(RULE_FILE_NAME);
    if !rule_path.is_file() {
        return;
    }

    let rules = match file::read_rules(&rule_path) {
        Ok(rules) => rules,
        Err(error) => {
            observe(IndexDiagnostic::RuleFile(error));
            Vec::new()
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        directory = %directory.display(),
        rules = rules.len(),
        "loaded rule file"
    );

    sets.insert(
        directory.to_path_buf(),
        RuleSet::new(directory.to_path_buf(), rules),
    );
}

/// Non-fatal problem encountered while building a [`RuleIndex`].
#[derive(Debug)]
pub enum IndexDiagnostic {
    /// A rule file exists but could not be read; it was indexed as empty.
    RuleFile(RuleFileError),
    /// A directory could not be traversed; its subtree was skipped.
    Walk(WalkError),
    /// A start path could not be resolved and was dropped.
    UnresolvedStartPath {
        /// The start path as supplied by the caller.
        path: PathBuf,
        /// The underlying resolution failure.
        source: io::Error,
    },
    /// A start path lies outside the project root; rule discovery is
    /// bounded to the root, so the path was dropped.
    StartPathOutsideRoot {
        /// The resolved directory that fell outside the root.
        path: PathBuf,
    },
}

impl fmt::Display for IndexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleFile(error) => error.fmt(f),
            Self::Walk(error) => error.fmt(f),
            Self::UnresolvedStartPath { path, source } => {
                write!(
                    f,
                    "failed to resolve start path '{}': {}",
                    path.display(),
                    source
                )
            }
            Self::StartPathOutsideRoot { path } => {
                write!(
                    f,
                    "start path '{}' lies outside the project root; skipped",
                    path.display()
                )
            }
        }
    }
}
