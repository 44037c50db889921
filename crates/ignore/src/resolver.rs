use std::path::Path;

use crate::denylist;
use crate::index::RuleIndex;

/// Resolves the final ignore verdict for one candidate path.
///
/// The fixed denylist short-circuits first. Rule files are then consulted
/// along the ancestor chain from the candidate's immediate parent up to
/// the project root, nearest directory first; the first rule file with any
/// matching rule decides via its last matching line. A candidate equal to
/// the project root is resolved against the root's own rule set only.
pub(crate) fn resolve(index: &RuleIndex, path: &Path) -> bool {
    if denylist::is_always_ignored(path) {
        return true;
    }

    let root = index.project_root();
    let mut directory = if path == root { Some(root) } else { path.parent() };

    while let Some(current) = directory {
        if let Some(set) = index.rule_set(current) {
            if let Some(relative) = relative_key(path, current) {
                if let Some(verdict) = set.verdict(&relative) {
                    return verdict;
                }
            }
        }
        if current == root {
            break;
        }
        directory = current.parent();
    }

    false
}

/// Renders `path` relative to `base` as forward-slash segments.
///
/// Returns `None` when the path is not beneath `base` or equals it; such
/// combinations cannot match any rule.
fn relative_key(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }

    let mut key = String::new();
    for component in relative.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    Some(key)
}
