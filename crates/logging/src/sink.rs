use std::io::{self, Write};

use crate::Verbosity;

/// Prefix attached to every rendered diagnostic line.
const PREFIX: &str = "codepack";

/// Writer wrapper that renders level-gated diagnostic lines.
///
/// The sink owns its writer so tests can pass a `Vec<u8>` and binaries can
/// pass a locked (or mutably borrowed) standard-error handle.
#[derive(Debug)]
pub struct DiagnosticSink<W> {
    writer: W,
    verbosity: Verbosity,
}

impl<W: Write> DiagnosticSink<W> {
    /// Creates a sink emitting messages at or below `verbosity`.
    pub const fn new(writer: W, verbosity: Verbosity) -> Self {
        Self { writer, verbosity }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Emits an info-level notice.
    pub fn info(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.emit(Verbosity::Info, text.as_ref())
    }

    /// Emits a debug-level notice.
    pub fn debug(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.emit(Verbosity::Debug, text.as_ref())
    }

    /// Emits an error diagnostic regardless of the configured level.
    pub fn error(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.write_line(text.as_ref())
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, level: Verbosity, text: &str) -> io::Result<()> {
        if !self.verbosity.allows(level) {
            return Ok(());
        }
        self.write_line(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(PREFIX.len() + text.len() + 3);
        line.push_str(PREFIX);
        line.push_str(": ");
        line.push_str(text);
        line.push('\n');
        self.writer.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(sink: DiagnosticSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("sink output is UTF-8")
    }

    #[test]
    fn off_sink_suppresses_info_and_debug() {
        let mut sink = DiagnosticSink::new(Vec::new(), Verbosity::Off);
        sink.info("quiet").expect("write");
        sink.debug("quieter").expect("write");
        assert!(rendered(sink).is_empty());
    }

    #[test]
    fn info_sink_emits_info_but_not_debug() {
        let mut sink = DiagnosticSink::new(Vec::new(), Verbosity::Info);
        sink.info("one").expect("write");
        sink.debug("two").expect("write");
        assert_eq!(rendered(sink), "codepack: one\n");
    }

    #[test]
    fn debug_sink_emits_everything_in_order() {
        let mut sink = DiagnosticSink::new(Vec::new(), Verbosity::Debug);
        sink.info("first").expect("write");
        sink.debug("second").expect("write");
        assert_eq!(rendered(sink), "codepack: first\ncodepack: second\n");
    }

    #[test]
    fn errors_bypass_the_level_gate() {
        let mut sink = DiagnosticSink::new(Vec::new(), Verbosity::Off);
        sink.error("cannot write output").expect("write");
        assert_eq!(rendered(sink), "codepack: cannot write output\n");
    }
}
