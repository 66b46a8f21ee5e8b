//! JSONPath pattern compilation and matching.
//!
//! A pattern selects a set of paths (see [`crate::MatchEvent::path`] for the
//! locator syntax). Three shapes are recognized:
//!
//! - **exact** — the literal path, e.g. `$.config.host`;
//! - **array wildcard** — a prefix ending in `[*]`, matching any index one
//!   level beneath it, e.g. `$.users[*]` matches `$.users[0]`, `$.users[17]`;
//! - **object wildcard** — a prefix ending in `.*`, matching any key exactly
//!   one level beneath it, e.g. `$.config.*` matches `$.config.host` but not
//!   `$.config.ssl.on`.
//!
//! Construction rejects empty patterns and recursive descent (`**`). No
//! other validation is performed: a syntactically odd pattern is accepted and
//! simply matches whatever the literal reading says, which may be nothing.

use regex::Regex;

use crate::error::PatternError;

/// Classification of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Matches exactly one literal path.
    Exact,
    /// Matches `prefix[<digits>]`.
    ArrayWildcard,
    /// Matches `prefix.<key>` for keys containing neither `.` nor `[`.
    ObjectWildcard,
}

/// A compiled JSONPath pattern.
///
/// # Examples
///
/// ```
/// use jsonsieve::PathPattern;
///
/// let pattern = PathPattern::parse("$.users[*]").unwrap();
/// assert!(pattern.matches("$.users[3]"));
/// assert!(!pattern.matches("$.users"));
/// assert!(pattern.has_matching_descendants("$.users"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    text: String,
    base: String,
    kind: PatternKind,
    // Predicate equivalent to `^base\[\d+\]$`; present iff ArrayWildcard.
    element: Option<Regex>,
}

impl PathPattern {
    /// Parses and classifies one pattern string.
    ///
    /// # Errors
    ///
    /// Fails on an empty pattern or one containing `**`.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        if text.contains("**") {
            return Err(PatternError::RecursiveDescent(text.to_owned()));
        }
        if let Some(base) = text.strip_suffix("[*]") {
            let element =
                Regex::new(&format!(r"^{}\[[0-9]+\]$", regex::escape(base))).map_err(|err| {
                    PatternError::Predicate {
                        pattern: text.to_owned(),
                        message: err.to_string(),
                    }
                })?;
            Ok(Self {
                text: text.to_owned(),
                base: base.to_owned(),
                kind: PatternKind::ArrayWildcard,
                element: Some(element),
            })
        } else if let Some(base) = text.strip_suffix(".*") {
            Ok(Self {
                text: text.to_owned(),
                base: base.to_owned(),
                kind: PatternKind::ObjectWildcard,
                element: None,
            })
        } else {
            Ok(Self {
                text: text.to_owned(),
                base: text.to_owned(),
                kind: PatternKind::Exact,
                element: None,
            })
        }
    }

    /// The original pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// How this pattern was classified.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Returns `true` iff `path` is in the set this pattern selects.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self.kind {
            PatternKind::Exact => path == self.base,
            PatternKind::ArrayWildcard => {
                self.element.as_ref().is_some_and(|re| re.is_match(path))
            }
            PatternKind::ObjectWildcard => match path.strip_prefix(self.base.as_str()) {
                Some(rest) => rest
                    .strip_prefix('.')
                    .is_some_and(|key| !key.contains(['.', '['])),
                None => false,
            },
        }
    }

    /// Returns `true` iff `path` matches, or is a (non-strict) ancestor of
    /// some path this pattern could match.
    ///
    /// Ancestry is a pure string-prefix check on the pattern's base: the
    /// remainder after `path` must be empty or begin with `.` or `[`.
    #[must_use]
    pub fn is_ancestor_or_match(&self, path: &str) -> bool {
        if self.matches(path) {
            return true;
        }
        match self.base.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
            None => false,
        }
    }

    /// Returns `true` iff some strictly deeper path could match, while
    /// `path` itself does not.
    #[must_use]
    pub fn has_matching_descendants(&self, path: &str) -> bool {
        self.is_ancestor_or_match(path) && !self.matches(path)
    }
}

/// Compiles the user's pattern list, rejecting an empty list.
pub(crate) fn compile_patterns<I, S>(patterns: I) -> Result<Vec<PathPattern>, PatternError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let compiled: Vec<PathPattern> = patterns
        .into_iter()
        .map(|pattern| PathPattern::parse(pattern.as_ref()))
        .collect::<Result<_, _>>()?;
    if compiled.is_empty() {
        return Err(PatternError::EmptyList);
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("$.name", PatternKind::Exact)]
    #[case("$.users[*]", PatternKind::ArrayWildcard)]
    #[case("$[*]", PatternKind::ArrayWildcard)]
    #[case("$.config.*", PatternKind::ObjectWildcard)]
    // Well-formed but unsupported selectors degrade to exact patterns.
    #[case("$.users[0]", PatternKind::Exact)]
    fn classification(#[case] text: &str, #[case] kind: PatternKind) {
        assert_eq!(PathPattern::parse(text).unwrap().kind(), kind);
    }

    #[test]
    fn rejects_empty_and_recursive_descent() {
        assert!(matches!(
            PathPattern::parse(""),
            Err(PatternError::EmptyPattern)
        ));
        assert!(matches!(
            PathPattern::parse("$.a.**"),
            Err(PatternError::RecursiveDescent(_))
        ));
        assert!(matches!(
            PathPattern::parse("$.**.b"),
            Err(PatternError::RecursiveDescent(_))
        ));
    }

    #[rstest]
    #[case("$.name", "$.name", true)]
    #[case("$.name", "$.names", false)]
    #[case("$.users[*]", "$.users[0]", true)]
    #[case("$.users[*]", "$.users[12]", true)]
    #[case("$.users[*]", "$.users[0].id", false)]
    #[case("$.users[*]", "$.users", false)]
    #[case("$[*]", "$[7]", true)]
    #[case("$[*]", "$", false)]
    #[case("$[*]", "$.a", false)]
    #[case("$.a.*", "$.a.b", true)]
    #[case("$.a.*", "$.a.b.c", false)]
    #[case("$.a.*", "$.a[0]", false)]
    #[case("$.a.*", "$.a", false)]
    fn matching(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(PathPattern::parse(pattern).unwrap().matches(path), expected);
    }

    #[rstest]
    #[case("$.a.b.c", "$", true)]
    #[case("$.a.b.c", "$.a", true)]
    #[case("$.a.b.c", "$.a.b", true)]
    #[case("$.a.b.c", "$.a.b.c", true)]
    #[case("$.a.b.c", "$.a.bx", false)]
    #[case("$.a.b.c", "$.x", false)]
    #[case("$.users[*]", "$.users", true)]
    #[case("$[*]", "$", true)]
    #[case("$.config.*", "$.config", true)]
    #[case("$.config.*", "$.config.ssl", true)]
    #[case("$.config.*", "$.config.ssl.on", false)]
    fn ancestry(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let pattern = PathPattern::parse(pattern).unwrap();
        assert_eq!(pattern.is_ancestor_or_match(path), expected);
    }

    #[rstest]
    #[case("$.a.b", "$.a", true)]
    #[case("$.a.b", "$.a.b", false)]
    #[case("$.users[*]", "$.users", true)]
    #[case("$.users[*]", "$.users[0]", false)]
    #[case("$.config.*", "$.config", true)]
    #[case("$.config.*", "$.config.ssl", false)]
    fn descendants(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let pattern = PathPattern::parse(pattern).unwrap();
        assert_eq!(pattern.has_matching_descendants(path), expected);
    }

    #[test]
    fn compile_rejects_empty_list() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            compile_patterns(empty),
            Err(PatternError::EmptyList)
        ));
    }
}
