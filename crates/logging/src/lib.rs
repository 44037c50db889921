#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the small diagnostic layer shared by the codepack
//! workspace. The tool reports skipped files, unreadable rule files, and
//! progress summaries on standard error, but only when the user opted into
//! verbose output. This crate models that opt-in as a [`Verbosity`] level
//! derived from repeated `-v` flags and routes the actual text through a
//! [`DiagnosticSink`] that wraps an arbitrary writer, keeping the binary's
//! output capturable in tests.
//!
//! # Design
//!
//! - [`Verbosity`] is an ordered level (`Off` < `Info` < `Debug`) built from
//!   the number of `-v` occurrences on the command line.
//! - [`DiagnosticSink`] owns a writer and the active level. Messages carry a
//!   level; the sink renders `codepack: <text>` lines for messages at or below
//!   the active level and silently drops the rest.
//! - The optional `tracing` feature exposes [`trace::init`], which installs a
//!   `tracing-subscriber` env-filter matching the verbosity so instrumented
//!   library code participates in the same opt-in.
//!
//! # Invariants
//!
//! - A sink never writes anything at [`Verbosity::Off`] except explicit error
//!   diagnostics, which are always emitted.
//! - Rendering performs exactly one `write_all` per line, so interleaving
//!   with other writers sharing the underlying stream stays line-atomic.
//!
//! # Examples
//!
//! ```
//! use logging::{DiagnosticSink, Verbosity};
//!
//! let mut sink = DiagnosticSink::new(Vec::new(), Verbosity::Info);
//! sink.info("skipping ignored file: target/debug/app").unwrap();
//! sink.debug("rule file loaded: .gitignore").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "codepack: skipping ignored file: target/debug/app\n");
//! ```

mod sink;
mod verbosity;

#[cfg(feature = "tracing")]
pub mod trace;

pub use sink::DiagnosticSink;
pub use verbosity::Verbosity;
