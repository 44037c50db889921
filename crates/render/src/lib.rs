#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `render` turns the surviving candidate files into the final Markdown
//! document: one fenced code block per file, tagged with a language
//! derived from the file extension and a `name=` attribute carrying the
//! project-relative path. The crate also owns the two content heuristics
//! applied before a file reaches the document: a binary-extension
//! denylist that avoids reading obviously non-text files at all, and a
//! decoding check that drops files whose bytes are not valid UTF-8 or
//! that are saturated with replacement characters.
//!
//! # Design
//!
//! - [`has_binary_extension`] is the cheap pre-read filter.
//! - [`load_source`] reads a candidate and classifies it as renderable
//!   text or a skip, reporting hard I/O failures as [`SourceError`].
//! - [`DocumentBuilder`] accumulates fenced blocks in insertion order and
//!   renders the document in one pass.
//!
//! None of the heuristics fail a run: a problem file is skipped with a
//! reason the caller can report, and assembly continues.

mod binary;
mod document;
mod language;
mod source;

pub use binary::has_binary_extension;
pub use document::DocumentBuilder;
pub use language::language_for_path;
pub use source::{Loaded, SkipReason, SourceError, load_source};
