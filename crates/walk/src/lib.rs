#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal used by codepack
//! both to collect candidate source files and to discover per-directory
//! ignore-rule files. The walker enumerates entries depth-first with
//! lexicographically sorted siblings, so two runs over the same tree always
//! yield the same sequence regardless of the filesystem's native iteration
//! order.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures a traversal rooted at one path and builds a
//!   [`Walker`].
//! - [`Walker`] implements [`Iterator`], yielding [`WalkEntry`] values that
//!   carry the absolute path, the root-relative path, and an [`EntryKind`].
//! - Every directory is canonicalized before it is read and recorded in a
//!   visited set; a directory reached twice (symlink cycle, bind mount) is
//!   silently skipped on revisit. The guard is always active, not just when
//!   symlink following is enabled.
//! - A failed directory read surfaces as one [`WalkError`] item and the
//!   traversal continues with the remaining entries. Nothing in the walk is
//!   fatal to the run.
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments; every yielded path resides
//!   under the canonicalized root.
//! - Each physical directory is read at most once per traversal.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use walk::{EntryKind, WalkBuilder};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::create_dir(temp.path().join("src"))?;
//! std::fs::write(temp.path().join("src/lib.rs"), b"")?;
//!
//! let walker = WalkBuilder::new(temp.path()).build()?;
//! let files: Vec<_> = walker
//!     .filter_map(Result::ok)
//!     .filter(|entry| entry.kind() == EntryKind::File)
//!     .map(|entry| entry.relative().to_path_buf())
//!     .collect();
//! assert_eq!(files, vec![Path::new("src/lib.rs").to_path_buf()]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod error;
mod walker;

pub use entry::{EntryKind, WalkEntry};
pub use error::{WalkError, WalkOp};
pub use walker::{WalkBuilder, Walker};
