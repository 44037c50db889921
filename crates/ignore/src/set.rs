use std::path::{Path, PathBuf};

use crate::rule::Rule;

/// Ordered rules of one rule file, bound to the directory holding it.
#[derive(Clone, Debug)]
pub struct RuleSet {
    directory: PathBuf,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub(crate) fn new(directory: PathBuf, rules: Vec<Rule>) -> Self {
        Self { directory, rules }
    }

    /// Directory the rule file lives in; rules apply to paths beneath it.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Rules in file line order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns `true` if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Evaluates the set against a path relative to its directory.
    ///
    /// Rules are scanned in line order and every matching rule overwrites
    /// the verdict: `Some(true)` to ignore, `Some(false)` when the last
    /// matching rule was a negation. `None` means no rule matched and an
    /// ancestor set gets to decide.
    #[must_use]
    pub fn verdict(&self, relative: &str) -> Option<bool> {
        let mut verdict = None;
        for rule in &self.rules {
            if rule.matches(relative) {
                verdict = Some(!rule.is_negated());
            }
        }
        verdict
    }
}
