#![forbid(unsafe_code)]

//! Validation rules and rule sets.
//!
//! [`Rule`] is a closed enum of named predicates over a string value;
//! [`RuleSet`] is an ordered list of rules plus one optional external
//! predicate, evaluated as a short-circuit AND.
//!
//! All length semantics are grapheme-cluster counts, so a rule like
//! `MinLength(4)` treats `"café"` as four characters regardless of how the
//! accent is encoded.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Numeric rule, non-integer input | Rule fails (closed) |
//! | Empty rule set, no predicate | Evaluates `true` |
//! | Predicate panics | Propagates to the caller |

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Permissive email shape: local part of alphanumerics and `._%+-`, an `@`,
/// domain labels of alphanumerics/`-`/`.`, and an alphabetic top-level label
/// of at least two characters. Anchored so the whole value must match.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A single named validation rule.
///
/// Each rule is a pure predicate over a string value; see
/// [`passes`](Self::passes) for the exact semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Passes iff the value is non-empty.
    NotEmpty,
    /// Passes iff the value is shaped like an email address.
    Email,
    /// Passes iff the value is at least six characters, contains no
    /// whitespace, and contains at least one digit.
    Password,
    /// Passes iff the value equals the given string exactly.
    Matches(String),
    /// Passes iff the value is at least this many characters long.
    MinLength(usize),
    /// Passes iff the value is at most this many characters long.
    MaxLength(usize),
    /// Passes iff the value parses as an integer in `lo..=hi`.
    Between(i64, i64),
    /// Passes iff the value parses as an integer strictly greater than this.
    GreaterThan(i64),
    /// Passes iff the value parses as an integer strictly less than this.
    LessThan(i64),
}

impl Rule {
    /// Run the rule against `value`.
    ///
    /// Numeric rules fail closed when the value does not parse as an
    /// integer.
    #[must_use]
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Self::NotEmpty => !value.is_empty(),
            Self::Email => EMAIL_RE.is_match(value),
            Self::Password => {
                grapheme_len(value) >= 6
                    && !value.chars().any(char::is_whitespace)
                    && value.chars().any(|c| c.is_ascii_digit())
            }
            Self::Matches(expected) => value == expected,
            Self::MinLength(min) => grapheme_len(value) >= *min,
            Self::MaxLength(max) => grapheme_len(value) <= *max,
            Self::Between(lo, hi) => {
                matches!(parse_int(value), Some(n) if *lo <= n && n <= *hi)
            }
            Self::GreaterThan(bound) => matches!(parse_int(value), Some(n) if n > *bound),
            Self::LessThan(bound) => matches!(parse_int(value), Some(n) if n < *bound),
        }
    }

    /// Human-readable rule name, for logging and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotEmpty => "not empty",
            Self::Email => "email",
            Self::Password => "password format",
            Self::Matches(_) => "exact match",
            Self::MinLength(_) => "minimum length",
            Self::MaxLength(_) => "maximum length",
            Self::Between(_, _) => "integer range",
            Self::GreaterThan(_) => "greater than",
            Self::LessThan(_) => "less than",
        }
    }
}

fn grapheme_len(value: &str) -> usize {
    value.graphemes(true).count()
}

fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// An ordered list of rules plus one optional external predicate.
///
/// Evaluation is a short-circuit AND over the rules in order, then the
/// predicate. Order never changes the result (every rule is pure), only
/// which rule gets to fail first.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    custom: Option<Box<dyn Fn(&str) -> bool>>,
}

impl RuleSet {
    /// Create an empty rule set. Evaluates `true` until rules are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder).
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Install the external predicate (builder). Replaces any previous one.
    #[must_use]
    pub fn with_custom(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.custom = Some(Box::new(predicate));
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Install the external predicate, replacing any previous one.
    pub fn set_custom(&mut self, predicate: impl Fn(&str) -> bool + 'static) {
        self.custom = Some(Box::new(predicate));
    }

    /// Evaluate every rule (and the predicate, if present) against `value`.
    ///
    /// Returns `true` iff all of them pass.
    #[must_use]
    pub fn evaluate(&self, value: &str) -> bool {
        self.rules.iter().all(|rule| rule.passes(value))
            && self.custom.as_ref().is_none_or(|predicate| predicate(value))
    }

    /// The built-in rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the set has neither rules nor a predicate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.custom.is_none()
    }

    /// Number of built-in rules (the predicate is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            custom: None,
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
            custom: None,
        }
    }
}

impl core::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}
