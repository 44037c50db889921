use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use logging::DiagnosticSink;
use walk::{EntryKind, WalkBuilder};

/// Candidate files plus the start paths that produced them.
///
/// Start paths seed ignore-rule discovery; glob patterns contribute the
/// project root since their matches can land anywhere beneath it.
#[derive(Debug, Default)]
pub(crate) struct Collected {
    pub files: BTreeSet<PathBuf>,
    pub starts: Vec<PathBuf>,
}

/// Expands the positional arguments into a sorted, deduplicated candidate
/// set.
///
/// Each argument is tried as a file, then as a directory (walked
/// recursively), then as a glob pattern matched against paths relative to
/// the project root. Arguments that match nothing produce a diagnostic and
/// are dropped.
pub(crate) fn collect<W: Write>(
    paths: &[OsString],
    project_root: &Path,
    sink: &mut DiagnosticSink<W>,
) -> Collected {
    let mut collected = Collected::default();

    for raw in paths {
        let arg = Path::new(raw);
        if arg.is_file() {
            match fs::canonicalize(arg) {
                Ok(resolved) => {
                    collected.starts.push(resolved.clone());
                    collected.files.insert(resolved);
                }
                Err(error) => {
                    let _ = sink.info(format!(
                        "failed to resolve '{}': {error}",
                        arg.display()
                    ));
                }
            }
            continue;
        }
        if arg.is_dir() {
            collect_directory(arg, &mut collected, sink);
            continue;
        }
        if let Some(pattern) = raw.to_str() {
            if pattern.contains(['*', '?', '[']) {
                collect_glob(pattern, project_root, &mut collected, sink);
                continue;
            }
        }
        let _ = sink.info(format!("path not found: {}", arg.display()));
    }

    collected
}

fn collect_directory<W: Write>(
    directory: &Path,
    collected: &mut Collected,
    sink: &mut DiagnosticSink<W>,
) {
    let walker = match WalkBuilder::new(directory).build() {
        Ok(walker) => walker,
        Err(error) => {
            let _ = sink.info(error.to_string());
            return;
        }
    };
    let mut registered_start = false;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.is_root() {
                    collected.starts.push(entry.path().to_path_buf());
                    registered_start = true;
                }
                if entry.kind() == EntryKind::File {
                    collected.files.insert(entry.path().to_path_buf());
                }
            }
            Err(error) => {
                let _ = sink.info(error.to_string());
            }
        }
    }
    if !registered_start {
        // Root entry errored out; fall back to the caller-supplied path.
        collected.starts.push(directory.to_path_buf());
    }
}

fn collect_glob<W: Write>(
    pattern: &str,
    project_root: &Path,
    collected: &mut Collected,
    sink: &mut DiagnosticSink<W>,
) {
    let trimmed = pattern.strip_prefix("./").unwrap_or(pattern);
    let matcher = match GlobBuilder::new(trimmed).literal_separator(true).build() {
        Ok(glob) => glob.compile_matcher(),
        Err(error) => {
            let _ = sink.info(format!("invalid glob pattern '{pattern}': {error}"));
            return;
        }
    };

    let walker = match WalkBuilder::new(project_root).build() {
        Ok(walker) => walker,
        Err(error) => {
            let _ = sink.info(error.to_string());
            return;
        }
    };

    let before = collected.files.len();
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.kind() == EntryKind::File && matcher.is_match(entry.relative()) {
                    collected.files.insert(entry.path().to_path_buf());
                }
            }
            Err(error) => {
                let _ = sink.info(error.to_string());
            }
        }
    }

    if collected.files.len() == before {
        let _ = sink.info(format!("glob pattern matched nothing: {pattern}"));
    } else {
        // Matches can land anywhere under the root, so rule discovery has
        // to cover the whole tree.
        collected.starts.push(project_root.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::Verbosity;
    use std::ffi::OsString;

    fn sink() -> DiagnosticSink<Vec<u8>> {
        DiagnosticSink::new(Vec::new(), Verbosity::Info)
    }

    #[test]
    fn directories_walk_recursively_into_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        std::fs::create_dir(root.join("src")).expect("dir");
        std::fs::write(root.join("src/a.rs"), b"a").expect("write");
        std::fs::write(root.join("top.txt"), b"t").expect("write");

        let mut sink = sink();
        let collected = collect(&[root.as_os_str().to_owned()], root, &mut sink);
        let names: Vec<_> = collected
            .files
            .iter()
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(names.len(), 2);
        assert_eq!(collected.starts.len(), 1);
    }

    #[test]
    fn file_arguments_are_taken_verbatim() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("one.txt");
        std::fs::write(&file, b"1").expect("write");

        let mut sink = sink();
        let collected = collect(&[file.as_os_str().to_owned()], temp.path(), &mut sink);
        assert_eq!(collected.files.len(), 1);
    }

    #[test]
    fn globs_match_relative_to_the_project_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        std::fs::create_dir_all(root.join("src/deep")).expect("dirs");
        std::fs::write(root.join("src/a.py"), b"a").expect("write");
        std::fs::write(root.join("src/deep/b.py"), b"b").expect("write");
        std::fs::write(root.join("src/c.rs"), b"c").expect("write");

        let mut sink = sink();
        let collected = collect(&[OsString::from("src/**/*.py")], root, &mut sink);
        assert_eq!(collected.files.len(), 2);
        assert!(
            collected
                .files
                .iter()
                .all(|path| path.extension().is_some_and(|ext| ext == "py"))
        );
    }

    #[test]
    fn missing_paths_produce_a_diagnostic_and_nothing_else() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut sink = sink();
        let collected = collect(
            &[OsString::from("definitely-not-here.txt")],
            temp.path(),
            &mut sink,
        );
        assert!(collected.files.is_empty());
        let output = String::from_utf8(sink.into_inner()).expect("UTF-8");
        assert!(output.contains("path not found"));
    }

    #[test]
    fn duplicate_arguments_deduplicate_candidates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("one.txt");
        std::fs::write(&file, b"1").expect("write");

        let mut sink = sink();
        let collected = collect(
            &[file.as_os_str().to_owned(), file.as_os_str().to_owned()],
            temp.path(),
            &mut sink,
        );
        assert_eq!(collected.files.len(), 1);
    }
}
