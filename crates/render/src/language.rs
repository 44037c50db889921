use std::path::Path;

/// Maps a file extension to the info string used on its fenced block.
///
/// Unknown extensions produce an empty tag, which renders as a plain
/// fence.
#[must_use]
pub fn language_for_path(path: &Path) -> &'static str {
    let Some(extension) = path.extension().and_then(|extension| extension.to_str()) else {
        return "";
    };
    match extension.to_ascii_lowercase().as_str() {
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "hpp" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rb" => "ruby",
        "php" => "php",
        "rs" => "rust",
        "kt" => "kotlin",
        "swift" => "swift",
        "md" => "markdown",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "html" | "htm" => "html",
        "css" => "css",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "sql" => "sql",
        "r" => "r",
        "pl" => "perl",
        "lua" => "lua",
        "scala" => "scala",
        "hs" => "haskell",
        "clj" => "clojure",
        "f90" | "f95" => "fortran",
        "txt" => "text",
        _ => "",
    }
}
