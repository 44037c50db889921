use crate::matcher::Matcher;

/// One compiled ignore rule.
///
/// A rule records the pattern text (without the leading `!` marker), the
/// flags derived from its shape, and the matcher compiled from it. The
/// flags are mutually informative rather than exclusive: a pattern ending
/// in `/` is directory-only, and a pattern with a separator before its
/// final segment is anchored to the rule file's directory.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: String,
    negate: bool,
    dir_only: bool,
    anchored: bool,
    matcher: Matcher,
}

impl Rule {
    /// Parses one rule-file line.
    ///
    /// Returns `None` for blank lines and `#` comments. The line is
    /// trimmed, a leading `!` is stripped and recorded as negation, a
    /// trailing `/` marks the rule directory-only, and an internal `/`
    /// marks it anchored. The matcher is compiled here, once; a pattern
    /// that is not a valid glob falls back to literal comparison instead
    /// of being rejected.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let (negate, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if body.is_empty() {
            return None;
        }

        let dir_only = body.ends_with('/');
        let anchored = body.trim_end_matches('/').contains('/');
        let matcher = Matcher::compile(body, dir_only, anchored);

        Some(Self {
            pattern: body.to_owned(),
            negate,
            dir_only,
            anchored,
            matcher,
        })
    }

    /// Pattern text, without the negation marker.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` if a match re-includes the path instead of ignoring it.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negate
    }

    /// Returns `true` if the pattern only applies to a directory and its
    /// contents.
    #[must_use]
    pub const fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Returns `true` if the pattern is matched against the full path
    /// relative to its rule file's directory rather than against basenames.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Evaluates the rule against a forward-slash relative path.
    pub(crate) fn matches(&self, relative: &str) -> bool {
        self.matcher.matches(relative)
    }
}
