//! Change-type classification from path patterns.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

static TEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(test|spec|\.test\.|\.spec\.)").unwrap());
static FIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(fix|bug|patch)\b").unwrap());
static CHORE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(deps|package\.json|lock)").unwrap());
static DOCS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(doc|readme|\.md)\b").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(style|css|tailwind)\b").unwrap());
static REFACTOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(refactor)\b").unwrap());

/// Conventional commit types, in rule-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Test,
    Fix,
    Chore,
    Docs,
    Style,
    Refactor,
    Feat,
}

impl ChangeType {
    /// Get the conventional-commit keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Fix => "fix",
            Self::Chore => "chore",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Feat => "feat",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a staged path into a change type.
///
/// Rules are checked in order and the first match wins. The test rule has
/// no trailing word boundary, so "tests/" and "testing" both count as
/// test changes. Paths matching nothing default to `Feat`.
pub fn change_type_of(path: &str) -> ChangeType {
    let lower = path.to_lowercase();

    if TEST_RE.is_match(&lower) {
        return ChangeType::Test;
    }
    if FIX_RE.is_match(&lower) {
        return ChangeType::Fix;
    }
    // The prefix check runs against the original casing; the "config"
    // check runs against the lower-cased path. Long-standing asymmetry,
    // kept as-is.
    if CHORE_PREFIX_RE.is_match(path) || lower.contains("config") {
        return ChangeType::Chore;
    }
    if DOCS_RE.is_match(&lower) {
        return ChangeType::Docs;
    }
    if STYLE_RE.is_match(&lower) {
        return ChangeType::Style;
    }
    if REFACTOR_RE.is_match(&lower) {
        return ChangeType::Refactor;
    }

    ChangeType::Feat
}
