use std::path::Path;

/// Extensions whose content is never useful in a context document.
const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "ico",
    // Archives
    "zip", "tar", "gz", "rar", "7z", "whl",
    // Executables and compiled artifacts
    "exe", "dll", "so", "dylib", "o", "a", "pyc", "pyo", "class", "jar",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // Media
    "mp3", "wav", "ogg", "mp4", "mkv", "avi", "mov",
    // Databases
    "db", "sqlite", "sqlite3",
    // Fonts
    "ttf", "otf", "woff", "woff2",
    // Lock files: their existence is interesting, their content is not.
    "lock",
];

/// Returns `true` if the extension marks `path` as likely binary.
///
/// The comparison is case-insensitive; a path without an extension is
/// never considered binary by this check.
#[must_use]
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            let lowered = extension.to_ascii_lowercase();
            BINARY_EXTENSIONS.contains(&lowered.as_str())
        })
}
