use std::path::{Component, Path};

/// Filenames that are always excluded, regardless of rule-file content.
///
/// Lock files carry machine-generated content that is never useful in a
/// context document, and `.DS_Store` is filesystem litter.
pub const ALWAYS_IGNORED_FILENAMES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "Pipfile.lock",
    "poetry.lock",
    ".DS_Store",
];

/// Version-control metadata directories whose contents are always excluded.
pub const VCS_METADATA_DIRS: &[&str] = &[".git", ".svn", ".hg", ".bzr", "CVS"];

/// Returns `true` if `path` is unconditionally excluded.
///
/// Two checks: the final component against [`ALWAYS_IGNORED_FILENAMES`],
/// and every parent component against [`VCS_METADATA_DIRS`]. The final
/// component is deliberately not tested against the directory list so a
/// regular file that happens to be named like one is not swallowed.
#[must_use]
pub fn is_always_ignored(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
        if ALWAYS_IGNORED_FILENAMES.contains(&name) {
            return true;
        }
    }

    path.parent().is_some_and(|parent| {
        parent.components().any(|component| {
            matches!(
                component,
                Component::Normal(name)
                    if name.to_str().is_some_and(|name| VCS_METADATA_DIRS.contains(&name))
            )
        })
    })
}
