use std::path::Path;

use crate::language::language_for_path;

/// Accumulates fenced code blocks and renders the final document.
///
/// Files are emitted in insertion order; callers feed candidates sorted
/// by relative path so the document order is stable across runs.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    blocks: Vec<String>,
}

impl DocumentBuilder {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one file as a fenced block.
    ///
    /// The fence carries the detected language and a `name=` attribute
    /// with the project-relative path (forward slashes). Content is
    /// trimmed of surrounding whitespace; the fence supplies the final
    /// newline structure.
    pub fn push_file(&mut self, relative_path: &str, content: &str) {
        let language = language_for_path(Path::new(relative_path));
        let body = content.trim();
        let mut block =
            String::with_capacity(body.len() + relative_path.len() + language.len() + 16);
        block.push_str("```");
        block.push_str(language);
        block.push_str(" name=");
        block.push_str(relative_path);
        block.push('\n');
        block.push_str(body);
        block.push_str("\n```");
        self.blocks.push(block);
    }

    /// Number of files pushed so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.blocks.len()
    }

    /// Renders the document: blocks separated by a blank line, with a
    /// trailing newline when any content exists.
    #[must_use]
    pub fn finish(self) -> String {
        if self.blocks.is_empty() {
            return String::new();
        }
        let mut document = self.blocks.join("\n\n");
        document.push('\n');
        document
    }
}
