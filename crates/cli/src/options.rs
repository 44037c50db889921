use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;
use logging::Verbosity;

/// Resolved command-line options.
#[derive(Clone, Debug)]
pub(crate) struct Options {
    /// Path arguments as given; empty input defaults to `.`.
    pub paths: Vec<OsString>,
    /// Document destination; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Directory the ignore hierarchy is rooted at.
    pub project_root: PathBuf,
    /// `false` when `--no-gitignore` bypasses the ignore engine.
    pub respect_rules: bool,
    /// Diagnostic level derived from `-v` occurrences.
    pub verbosity: Verbosity,
}

impl Options {
    pub(crate) fn from_matches(matches: &ArgMatches) -> Self {
        let paths = matches
            .get_many::<OsString>("paths")
            .map(|values| values.cloned().collect::<Vec<_>>())
            .filter(|values| !values.is_empty())
            .unwrap_or_else(|| vec![OsString::from(".")]);

        Self {
            paths,
            output: matches
                .get_one::<OsString>("output")
                .map(|value| PathBuf::from(value.clone())),
            project_root: matches
                .get_one::<OsString>("project-root")
                .map_or_else(|| PathBuf::from("."), |value| PathBuf::from(value.clone())),
            respect_rules: !matches.get_flag("no-gitignore"),
            verbosity: Verbosity::from_occurrences(matches.get_count("verbose")),
        }
    }
}
