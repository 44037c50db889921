#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the codepack command-line front-end. It recognises the
//! tool's small option surface (`PATHS…`, `-o/--output`, `--project-root`,
//! `--no-gitignore`, `-v/--verbose`, `-h/--help`, `-V/--version`) and runs
//! the pipeline: collect candidate files, filter them through the
//! hierarchical ignore engine, and render the surviving files into one
//! Markdown document.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. It accepts an
//! argument iterator together with handles for standard output and error,
//! so binaries pass locked stdio while tests pass in-memory buffers and
//! assert on exact output. [`exit_code_from`] maps the returned status to
//! a [`std::process::ExitCode`] for `main`.
//!
//! # Invariants
//!
//! - `run` never panics; argument problems report on `stderr` with exit
//!   code 1, output write failures with exit code 2.
//! - Per-file problems (binary content, unreadable files, ignored paths)
//!   are diagnostics on the verbose channel, never failures.
//! - With `--no-gitignore` the ignore engine is skipped entirely; only the
//!   binary-extension and decoding heuristics still apply.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(["codepack", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("codepack "));
//! ```

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

mod collect;
mod options;
mod pipeline;

use options::Options;

/// Exit status for a completed run.
const EXIT_OK: i32 = 0;
/// Exit status for argument and setup errors.
const EXIT_USAGE: i32 = 1;
/// Exit status when the document cannot be written.
const EXIT_OUTPUT: i32 = 2;

/// Deterministic help text describing the supported option surface.
const HELP_TEXT: &str = concat!(
    "codepack ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Flatten a source tree into a single Markdown document for LLM context.\n",
    "\n",
    "Usage: codepack [OPTIONS] [PATHS]...\n",
    "\n",
    "Arguments:\n",
    "  [PATHS]...  Files, directories, or glob patterns to process.\n",
    "              Defaults to the current directory.\n",
    "\n",
    "Options:\n",
    "  -o, --output FILE       Write the document to FILE instead of stdout.\n",
    "      --project-root DIR  Resolve ignore rules relative to DIR.\n",
    "                          Defaults to the current directory.\n",
    "      --no-gitignore      Do not consult .gitignore files.\n",
    "  -v, --verbose           Report skipped files on stderr; repeat for\n",
    "                          internal detail.\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
);

/// Parses arguments and executes the pipeline.
///
/// Returns the process exit status; all output flows through the supplied
/// writers.
pub fn run<I, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let _ = write!(stderr, "{error}");
            return EXIT_USAGE;
        }
    };

    if matches.get_flag("help") {
        let _ = stdout.write_all(HELP_TEXT.as_bytes());
        return EXIT_OK;
    }
    if matches.get_flag("version") {
        let _ = writeln!(stdout, "codepack {}", env!("CARGO_PKG_VERSION"));
        return EXIT_OK;
    }

    let options = Options::from_matches(&matches);
    logging::trace::init(options.verbosity);
    pipeline::execute(&options, stdout, stderr)
}

/// Maps a [`run`] status to an [`ExitCode`].
#[must_use]
pub fn exit_code_from(code: i32) -> ExitCode {
    let clamped = code.clamp(0, i32::from(u8::MAX));
    ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn command() -> Command {
    Command::new("codepack")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .value_name("DIR")
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("no-gitignore")
                .long("no-gitignore")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATHS")
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(
            std::iter::once("codepack").chain(args.iter().copied()),
            &mut stdout,
            &mut stderr,
        );
        (
            code,
            String::from_utf8(stdout).expect("stdout UTF-8"),
            String::from_utf8(stderr).expect("stderr UTF-8"),
        )
    }

    #[test]
    fn help_prints_to_stdout_and_succeeds() {
        let (code, stdout, stderr) = run_captured(&["--help"]);
        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("Usage: codepack"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn version_prints_the_package_version() {
        let (code, stdout, _) = run_captured(&["-V"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            stdout,
            format!("codepack {}\n", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn unknown_flags_fail_with_usage_status() {
        let (code, _, stderr) = run_captured(&["--frobnicate"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(!stderr.is_empty());
    }

    #[test]
    fn missing_project_root_fails_with_usage_status() {
        let (code, _, stderr) =
            run_captured(&["--project-root", "/definitely/not/a/real/dir"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(stderr.contains("project root"));
    }

    #[test]
    fn end_to_end_document_respects_root_rules() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join(".gitignore"), "build/\n*.tmp\n!keep.tmp\n").expect("write");
        fs::create_dir(root.join("build")).expect("dir");
        fs::write(root.join("build/out.o"), b"obj").expect("write");
        fs::write(root.join("notes.tmp"), "scratch").expect("write");
        fs::write(root.join("keep.tmp"), "pinned").expect("write");
        fs::write(root.join("main.rs"), "fn main() {}").expect("write");

        let root_arg = root.to_str().expect("utf8 path");
        let (code, stdout, _) = run_captured(&["--project-root", root_arg, root_arg]);

        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("name=main.rs"));
        assert!(stdout.contains("name=keep.tmp"));
        assert!(!stdout.contains("notes.tmp"));
        assert!(!stdout.contains("out.o"));
        // The rule file itself is a candidate like any other.
        assert!(stdout.contains("name=.gitignore"));
    }

    #[test]
    fn no_gitignore_bypasses_the_ignore_engine() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join(".gitignore"), "*.tmp\n").expect("write");
        fs::write(root.join("notes.tmp"), "scratch").expect("write");

        let root_arg = root.to_str().expect("utf8 path");
        let (code, stdout, _) = run_captured(&[
            "--project-root",
            root_arg,
            "--no-gitignore",
            root_arg,
        ]);

        assert_eq!(code, EXIT_OK);
        assert!(stdout.contains("name=notes.tmp"));
    }

    #[test]
    fn output_file_receives_the_document() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join("lib.rs"), "pub fn lib() {}").expect("write");
        let out = root.join("bundle.md");

        let root_arg = root.to_str().expect("utf8 path");
        let out_arg = out.to_str().expect("utf8 path");
        let (code, stdout, _) = run_captured(&[
            "--project-root",
            root_arg,
            "-o",
            out_arg,
            root_arg,
        ]);

        assert_eq!(code, EXIT_OK);
        assert!(stdout.is_empty());
        let document = fs::read_to_string(&out).expect("read output");
        assert!(document.contains("name=lib.rs"));
    }

    #[test]
    fn unwritable_output_fails_with_output_status() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join("lib.rs"), "pub fn lib() {}").expect("write");

        let root_arg = root.to_str().expect("utf8 path");
        let out_arg = root.join("missing-dir/bundle.md");
        let (code, _, stderr) = run_captured(&[
            "--project-root",
            root_arg,
            "-o",
            out_arg.to_str().expect("utf8 path"),
            root_arg,
        ]);

        assert_eq!(code, EXIT_OUTPUT);
        assert!(stderr.contains("codepack:"));
    }

    #[test]
    fn verbose_reports_skipped_files_on_stderr() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join(".gitignore"), "*.tmp\n").expect("write");
        fs::write(root.join("notes.tmp"), "scratch").expect("write");
        fs::write(root.join("logo.png"), [0x89, 0x50, 0x4e, 0x47]).expect("write");

        let root_arg = root.to_str().expect("utf8 path");
        let (code, _, stderr) =
            run_captured(&["--project-root", root_arg, "-v", root_arg]);

        assert_eq!(code, EXIT_OK);
        assert!(stderr.contains("skipping ignored file: notes.tmp"));
        assert!(stderr.contains("skipping likely binary file: logo.png"));
    }

    #[test]
    fn exit_code_mapping_clamps_to_u8() {
        let rendered = |code: i32| format!("{:?}", exit_code_from(code));
        assert_eq!(rendered(0), format!("{:?}", ExitCode::from(0)));
        assert_eq!(rendered(2), format!("{:?}", ExitCode::from(2)));
        assert_eq!(rendered(1000), format!("{:?}", ExitCode::from(255)));
        assert_eq!(rendered(-3), format!("{:?}", ExitCode::from(0)));
    }
}
