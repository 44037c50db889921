use std::fs;
use std::io::Write;
use std::path::Path;

use ignore::IndexBuilder;
use logging::DiagnosticSink;
use render::{DocumentBuilder, Loaded};

use crate::collect;
use crate::options::Options;
use crate::{EXIT_OK, EXIT_OUTPUT, EXIT_USAGE};

/// Runs the collect → filter → render pipeline.
pub(crate) fn execute<O, E>(options: &Options, stdout: &mut O, stderr: &mut E) -> i32
where
    O: Write,
    E: Write,
{
    let mut sink = DiagnosticSink::new(stderr, options.verbosity);

    let project_root = match fs::canonicalize(&options.project_root) {
        Ok(resolved) => resolved,
        Err(error) => {
            let _ = sink.error(format!(
                "cannot resolve project root '{}': {error}",
                options.project_root.display()
            ));
            return EXIT_USAGE;
        }
    };
    let _ = sink.info(format!("project root: {}", project_root.display()));

    let collected = collect::collect(&options.paths, &project_root, &mut sink);
    let _ = sink.info(format!(
        "{} candidate file(s) before filtering",
        collected.files.len()
    ));
    tracing::debug!(candidates = collected.files.len(), "collection complete");

    // The index is built exactly once, before any candidate is evaluated,
    // and is read-only from here on.
    let index = if options.respect_rules {
        let index = IndexBuilder::new(&project_root)
            .start_paths(collected.starts.iter().cloned())
            .build_with(|diagnostic| {
                let _ = sink.info(diagnostic.to_string());
            });
        let _ = sink.debug(format!(
            "rule files discovered in {} director(ies)",
            index.len()
        ));
        Some(index)
    } else {
        let _ = sink.info("ignore-rule processing disabled");
        None
    };

    let mut document = DocumentBuilder::new();
    for path in &collected.files {
        let Some(relative) = relative_display(path, &project_root) else {
            let _ = sink.info(format!(
                "skipping file outside project root: {}",
                path.display()
            ));
            continue;
        };
        if render::has_binary_extension(path) {
            let _ = sink.info(format!("skipping likely binary file: {relative}"));
            continue;
        }
        if let Some(index) = &index {
            if index.is_ignored(path) {
                let _ = sink.info(format!("skipping ignored file: {relative}"));
                continue;
            }
        }
        match render::load_source(path) {
            Ok(Loaded::Text(text)) => document.push_file(&relative, &text),
            Ok(Loaded::Skipped(reason)) => {
                let _ = sink.info(format!("skipping {relative}: {reason}"));
            }
            Err(error) => {
                let _ = sink.error(error.to_string());
            }
        }
    }

    let rendered = document.file_count();
    let text = document.finish();

    match &options.output {
        Some(path) => {
            if let Err(error) = fs::write(path, &text) {
                let _ = sink.error(format!("failed to write '{}': {error}", path.display()));
                return EXIT_OUTPUT;
            }
            let _ = sink.info(format!("wrote {rendered} file(s) to {}", path.display()));
        }
        None => {
            if let Err(error) = stdout.write_all(text.as_bytes()) {
                let _ = sink.error(format!("failed to write document: {error}"));
                return EXIT_OUTPUT;
            }
            let _ = sink.info(format!("processed {rendered} file(s)"));
        }
    }

    EXIT_OK
}

/// Renders `path` relative to `root` with forward slashes for display and
/// fence headers. Returns `None` for paths outside the root.
fn relative_display(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }

    let mut display = String::new();
    for component in relative.components() {
        if !display.is_empty() {
            display.push('/');
        }
        display.push_str(&component.as_os_str().to_string_lossy());
    }
    Some(display)
}
