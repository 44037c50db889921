use globset::{GlobBuilder, GlobMatcher};

/// Compiled form of one rule pattern.
///
/// Compilation happens once at parse time; queries only evaluate the
/// compiled representation. Globs are built with a literal separator so
/// `*` and `?` stop at `/` while `**` spans directories. A pattern that
/// `globset` rejects degrades to [`Matcher::Literal`] rather than failing
/// the parse.
#[derive(Clone, Debug)]
pub(crate) enum Matcher {
    /// Directory-only rule: literal prefix test on `relative + "/"`.
    DirPrefix(String),
    /// Anchored rule: glob over the full relative path.
    Anchored(GlobMatcher),
    /// Unanchored rule: glob over the basename, plus a subtree glob that
    /// covers paths nested beneath a matching entry.
    Name {
        name: GlobMatcher,
        subtree: GlobMatcher,
    },
    /// Fallback for unparseable globs: exact string comparison following
    /// the same anchoring rules.
    Literal { pattern: String, anchored: bool },
}

impl Matcher {
    /// Compiles `pattern` according to its shape flags.
    pub(crate) fn compile(pattern: &str, dir_only: bool, anchored: bool) -> Self {
        // A leading slash in a rule file anchors the pattern to the rule
        // directory; relative paths never start with one.
        let stripped = pattern.strip_prefix('/').unwrap_or(pattern);

        if dir_only {
            return Self::DirPrefix(stripped.to_owned());
        }

        if anchored {
            return match compile_glob(stripped) {
                Some(glob) => Self::Anchored(glob),
                None => Self::Literal {
                    pattern: stripped.to_owned(),
                    anchored: true,
                },
            };
        }

        let name = compile_glob(stripped);
        let subtree = compile_glob(&format!("{stripped}/**"));
        match (name, subtree) {
            (Some(name), Some(subtree)) => Self::Name { name, subtree },
            _ => Self::Literal {
                pattern: stripped.to_owned(),
                anchored: false,
            },
        }
    }

    /// Evaluates the matcher against a forward-slash relative path.
    ///
    /// Never panics; an empty relative path matches nothing.
    pub(crate) fn matches(&self, relative: &str) -> bool {
        if relative.is_empty() {
            return false;
        }
        match self {
            Self::DirPrefix(prefix) => {
                let mut with_slash = String::with_capacity(relative.len() + 1);
                with_slash.push_str(relative);
                with_slash.push('/');
                with_slash.starts_with(prefix)
            }
            Self::Anchored(glob) => glob.is_match(relative),
            Self::Name { name, subtree } => {
                name.is_match(basename(relative)) || subtree.is_match(relative)
            }
            Self::Literal { pattern, anchored } => {
                if *anchored {
                    relative == pattern
                } else {
                    basename(relative) == pattern
                        || relative == pattern
                        || is_nested_under(relative, pattern)
                }
            }
        }
    }
}

fn compile_glob(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .ok()
        .map(|glob| glob.compile_matcher())
}

fn basename(relative: &str) -> &str {
    relative.rsplit('/').next().unwrap_or(relative)
}

fn is_nested_under(relative: &str, pattern: &str) -> bool {
    relative.len() > pattern.len()
        && relative.starts_with(pattern)
        && relative.as_bytes()[pattern.len()] == b'/'
}

#[cfg(test)]
mod tests {
    use super::Matcher;

    fn compile(pattern: &str) -> Matcher {
        let dir_only = pattern.ends_with('/');
        let anchored = pattern.trim_end_matches('/').contains('/');
        Matcher::compile(pattern, dir_only, anchored)
    }

    #[test]
    fn directory_prefix_covers_itself_and_descendants() {
        let matcher = compile("build/");
        assert!(matcher.matches("build"));
        assert!(matcher.matches("build/out.o"));
        assert!(matcher.matches("build/deep/nested.o"));
        assert!(!matcher.matches("barbuild/x"));
        assert!(!matcher.matches("rebuild"));
    }

    #[test]
    fn unanchored_name_matches_at_any_depth() {
        let matcher = compile("*.log");
        assert!(matcher.matches("app.log"));
        assert!(matcher.matches("sub/app.log"));
        assert!(matcher.matches("a/b/c/app.log"));
        assert!(!matcher.matches("app.log.bak"));
    }

    #[test]
    fn unanchored_name_covers_nested_paths_beneath_a_match() {
        let matcher = compile("node_modules");
        assert!(matcher.matches("node_modules"));
        assert!(matcher.matches("node_modules/pkg/index.js"));
        // Subtree coverage starts at the rule directory, not mid-path.
        assert!(!matcher.matches("vendor/node_modules/pkg/index.js"));
    }

    #[test]
    fn anchored_glob_does_not_cross_separators() {
        let matcher = compile("src/*.rs");
        assert!(matcher.matches("src/lib.rs"));
        assert!(!matcher.matches("src/nested/lib.rs"));
        assert!(!matcher.matches("other/src/lib.rs"));
    }

    #[test]
    fn double_star_crosses_separators() {
        let matcher = compile("src/**/*.rs");
        assert!(matcher.matches("src/a/lib.rs"));
        assert!(matcher.matches("src/a/b/lib.rs"));
    }

    #[test]
    fn question_mark_matches_one_non_separator_character() {
        let matcher = compile("v?.txt");
        assert!(matcher.matches("v1.txt"));
        assert!(matcher.matches("sub/v2.txt"));
        assert!(!matcher.matches("v10.txt"));
    }

    #[test]
    fn character_classes_are_supported() {
        let matcher = compile("report[0-9].csv");
        assert!(matcher.matches("report3.csv"));
        assert!(!matcher.matches("reportx.csv"));
    }

    #[test]
    fn leading_slash_anchors_to_the_rule_directory() {
        let matcher = Matcher::compile("/TODO", false, true);
        assert!(matcher.matches("TODO"));
        assert!(!matcher.matches("docs/TODO"));
    }

    #[test]
    fn unparseable_glob_degrades_to_literal_comparison() {
        let matcher = compile("[invalid");
        assert!(matcher.matches("[invalid"));
        assert!(matcher.matches("sub/[invalid"));
        assert!(matcher.matches("[invalid/nested.txt"));
        assert!(!matcher.matches("invalid"));
    }

    #[test]
    fn empty_relative_path_never_matches() {
        assert!(!compile("*").matches(""));
        assert!(!compile("build/").matches(""));
    }
}
