//! Translation of rule specs into full-match patterns.

use super::spec::RuleSpec;
use crate::error::{PwgateError, Result};
use regex::{Regex, RegexBuilder};

/// Characters escaped inside a generated character class: the class
/// metacharacters plus the regex crate's set-operation characters.
const CLASS_METACHARACTERS: [char; 7] = ['\\', '[', ']', '-', '^', '&', '~'];

/// Compiled size budget of a pattern without counted repetitions (the regex
/// crate's default).
const BASE_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiled size budget per counted repetition. One `[^\p{Lu}]*\p{Lu}` step
/// needs a little over 50 KiB.
const SIZE_LIMIT_PER_REPETITION: usize = 128 * (1 << 10);

/// Matches every candidate.
const MATCH_ANY: &str = "(?s:.*)";

/// Matches no candidate: no position is both a word boundary and not one.
const MATCH_NONE: &str = r"\b\B";

/// Executable form of a `RuleSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Pattern that must match the entire candidate.
    pub pattern: String,
    /// Hint shown next to the rule.
    pub hint: String,
    /// Compiled size budget handed to the regex engine.
    pub size_limit: usize,
}

impl CompiledRule {
    pub fn new(pattern: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            hint: hint.into(),
            size_limit: BASE_SIZE_LIMIT,
        }
    }

    /// Raise the compiled size budget to fit `repetitions` counted steps.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        let needed = repetitions.saturating_mul(SIZE_LIMIT_PER_REPETITION);
        self.size_limit = BASE_SIZE_LIMIT.max(needed);
        self
    }

    /// The pattern wrapped so it only matches whole candidates.
    pub fn anchored_pattern(&self) -> String {
        format!("^(?:{})$", self.pattern)
    }

    /// Build the full-match regex for this rule.
    ///
    /// # Returns
    ///
    /// * `Ok(Regex)` - Anchored matcher
    /// * `Err(PwgateError::InvalidPattern)` - The pattern is not valid regex syntax
    pub fn matcher(&self) -> Result<Regex> {
        match self.build(&self.anchored_pattern()) {
            Ok(regex) => Ok(regex),
            // A trailing `(?x)` comment swallows the closing `)$`; a newline ends
            // the comment and is ignored in verbose mode.
            Err(_) if self.build(&self.pattern).is_ok() => {
                self.build(&format!("^(?:{}\n)$", self.pattern))
            }
            Err(err) => Err(err),
        }
    }

    fn build(&self, pattern: &str) -> Result<Regex> {
        RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .build()
            .map_err(|e| PwgateError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: e.to_string(),
            })
    }
}

/// Compile a rule spec into its pattern and hint.
///
/// Built-in kinds produce bounded-count patterns that the regex crate runs in
/// linear time. Custom patterns are passed through untouched.
///
/// # Example
///
/// ```
/// use pwgate::rules::{RuleSpec, compile};
///
/// let rule = compile(&RuleSpec::min_length(8, "8+ chars"));
/// assert_eq!(rule.pattern, "(?s:.{8,})");
/// assert_eq!(rule.hint, "8+ chars");
/// ```
pub fn compile(spec: &RuleSpec) -> CompiledRule {
    let repetitions = match spec {
        RuleSpec::MinLength { length: n, .. }
        | RuleSpec::MinUppercaseCount { count: n, .. }
        | RuleSpec::MinDigitCount { count: n, .. }
        | RuleSpec::MinSpecialCharCount { count: n, .. } => *n,
        RuleSpec::CustomPattern { .. } => 0,
    };

    let pattern = match spec {
        RuleSpec::MinLength { length, .. } => format!("(?s:.{{{length},}})"),
        RuleSpec::MinUppercaseCount { count, .. } => at_least(*count, r"\p{Lu}", r"[^\p{Lu}]"),
        RuleSpec::MinDigitCount { count, .. } => at_least(*count, r"\p{Nd}", r"[^\p{Nd}]"),
        RuleSpec::MinSpecialCharCount {
            count,
            allowed_chars,
            ..
        } => {
            let class = escape_class(allowed_chars);
            match (class.is_empty(), *count) {
                (true, 0) => MATCH_ANY.to_string(),
                (true, _) => MATCH_NONE.to_string(),
                (false, n) => at_least(n, &format!("[{class}]"), &format!("[^{class}]")),
            }
        }
        RuleSpec::CustomPattern { pattern, .. } => pattern.clone(),
    };

    CompiledRule::new(pattern, spec.hint()).with_repetitions(repetitions)
}

/// Escape characters for literal use inside a character class.
///
/// Duplicates are dropped (first occurrence wins) so the caller's ordering and
/// repetition never change what the class matches.
pub fn escape_class(chars: &[char]) -> String {
    let mut seen = Vec::with_capacity(chars.len());
    let mut escaped = String::with_capacity(chars.len() * 2);

    for &c in chars {
        if seen.contains(&c) {
            continue;
        }
        seen.push(c);
        if CLASS_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// At least `n` occurrences of `hit` anywhere, each preceded by any run of `miss`.
fn at_least(n: usize, hit: &str, miss: &str) -> String {
    format!("(?s:(?:{miss}*{hit}){{{n}}}.*)")
}
