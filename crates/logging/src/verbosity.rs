/// Diagnostic output level selected on the command line.
///
/// Levels are ordered: `Off < Info < Debug`. A sink configured at a given
/// level emits every message at that level or below it.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum Verbosity {
    /// No diagnostics beyond hard errors.
    #[default]
    Off,
    /// Per-file notices: skipped candidates, run summaries.
    Info,
    /// Internal detail: rule files loaded, index construction steps.
    Debug,
}

impl Verbosity {
    /// Maps the number of `-v` occurrences to a level.
    ///
    /// Zero occurrences stay silent, one enables info notices, and two or
    /// more enable debug detail.
    #[must_use]
    pub const fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Off,
            1 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Returns `true` if messages at `level` should be emitted.
    #[must_use]
    pub fn allows(self, level: Self) -> bool {
        level <= self
    }
}
