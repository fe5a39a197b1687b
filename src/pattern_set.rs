use crate::matcher::{match_any, MatchError};
use indexmap::IndexSet;

/// An ordered list of trusted origins or patterns, such as
/// `https://example.com` or `*://*.example.com:*`.
///
/// Patterns keep their given order and duplicates collapse onto the first
/// occurrence. Matching is a logical OR over the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: IndexSet<String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw pattern strings, keeping first occurrences.
    pub fn list<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a pattern, returning false when it was already present.
    pub fn insert<S: Into<String>>(&mut self, pattern: S) -> bool {
        self.patterns.insert(pattern.into())
    }

    /// Returns true if any pattern in the set matches `origin`.
    ///
    /// An empty origin never matches. A malformed pattern anywhere in the
    /// set fails the whole check rather than being skipped.
    pub fn matches(&self, origin: &str) -> Result<bool, MatchError> {
        match_any(origin, &self.patterns)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

impl<S: Into<String>> Extend<S> for PatternSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.patterns.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
#[path = "pattern_set_test.rs"]
mod pattern_set_test;
