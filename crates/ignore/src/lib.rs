#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ignore` decides which files codepack must leave out of the generated
//! document. It implements the `.gitignore` dialect most tools rely on:
//! one pattern per line, `#` comments, `!` negation, trailing `/` for
//! directory-only rules, and separator-aware globs (`*`, `?`, `[...]`,
//! `**`). Rule files are discovered per directory, so a pattern applies to
//! the subtree rooted at the directory holding its file, and rules closer
//! to a path take precedence over rules from broader ancestors.
//!
//! # Design
//!
//! - [`Rule`] parses a single pattern line and compiles its glob matcher
//!   exactly once. Queries evaluate the compiled form; pattern text is
//!   never re-interpreted per path.
//! - [`RuleSet`] is the ordered rule list of one rule file, bound to the
//!   directory holding that file.
//! - [`RuleIndex`] maps resolved directory paths to their [`RuleSet`]s. It
//!   is built once per run by [`IndexBuilder`], which loads the project
//!   root's rule file and walks each start path's containing directory,
//!   bounded to the project root and deduplicated by resolved directory.
//! - [`RuleIndex::is_ignored`] walks the candidate's ancestor chain from
//!   its immediate parent up to the project root. The nearest rule file
//!   containing any matching rule decides, and within one file the last
//!   matching line wins; a matching negation line flips the verdict back
//!   to "keep". A small fixed denylist (lock files, version-control
//!   metadata directories) short-circuits before any rule file is
//!   consulted.
//!
//! # Invariants
//!
//! - The index is immutable once built; queries take `&self` and the same
//!   query always returns the same verdict.
//! - Rule order within a set is the file's line order.
//! - No operation in this crate aborts a run: a missing rule file is an
//!   empty set, an unreadable one is an empty set plus a diagnostic, and a
//!   pattern whose glob fails to compile degrades to literal matching.
//!
//! # Examples
//!
//! ```
//! use ignore::RuleIndex;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::write(root.join(".gitignore"), "*.tmp\n!keep.tmp\n")?;
//! fs::write(root.join("keep.tmp"), b"")?;
//! fs::write(root.join("notes.tmp"), b"")?;
//!
//! let index = RuleIndex::build(root, [root.to_path_buf()]);
//! let root = index.project_root().to_path_buf();
//! assert!(index.is_ignored(&root.join("notes.tmp")));
//! assert!(!index.is_ignored(&root.join("keep.tmp")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - [`walk`] for the traversal primitives used during discovery.
//! - [`globset`] for the glob matching engine behind compiled rules.

mod denylist;
mod file;
mod index;
mod matcher;
mod resolver;
mod rule;
mod set;

pub use denylist::{ALWAYS_IGNORED_FILENAMES, VCS_METADATA_DIRS, is_always_ignored};
pub use file::{RULE_FILE_NAME, RuleFileError, parse_rules, read_rules};
pub use index::{IndexBuilder, IndexDiagnostic, RuleIndex};
pub use rule::Rule;
pub use set::RuleSet;
