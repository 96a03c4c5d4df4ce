//! The regex capability rules are compiled with
//!
//! The matcher only needs two things from a regex engine: turn a source
//! string into something matchable, and ask whether that thing matches a
//! text anywhere. [`RegexEngine`] provides both on top of the `regex` crate
//! with size limits applied, since combined alternations can get large.

use crate::{RegexLimits, Result, RuleError};
use regex::{Regex, RegexBuilder};

/// A compiled pattern that can be tested against text
pub trait MatchablePattern {
    /// Unanchored search: true if the pattern matches anywhere in `text`
    fn is_match(&self, text: &str) -> bool;

    /// The source the pattern was compiled from
    fn as_str(&self) -> &str;
}

impl MatchablePattern for Regex {
    fn is_match(&self, text: &str) -> bool {
        Regex::is_match(self, text)
    }

    fn as_str(&self) -> &str {
        Regex::as_str(self)
    }
}

/// Compiles pattern sources into [`MatchablePattern`]s
pub trait PatternEngine {
    type Pattern: MatchablePattern;

    /// Compile `pattern`, failing with a compile error if it is invalid
    fn compile(&self, pattern: &str) -> Result<Self::Pattern>;
}

/// Default engine backed by the `regex` crate
#[derive(Debug, Clone, Default)]
pub struct RegexEngine {
    limits: RegexLimits,
}

impl RegexEngine {
    pub fn new(limits: RegexLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn limits(&self) -> &RegexLimits {
        &self.limits
    }
}

impl PatternEngine for RegexEngine {
    type Pattern = Regex;

    fn compile(&self, pattern: &str) -> Result<Regex> {
        compile_regex_safe(pattern, &self.limits)
    }
}

/// Compile a regex with length and size limits
fn compile_regex_safe(pattern: &str, limits: &RegexLimits) -> Result<Regex> {
    if pattern.len() > limits.max_pattern_length {
        return Err(RuleError::PatternTooLong {
            length: pattern.len(),
            max: limits.max_pattern_length,
        });
    }

    RegexBuilder::new(pattern)
        .size_limit(limits.size_limit)
        .dfa_size_limit(limits.dfa_size_limit)
        .build()
        .map_err(|e| RuleError::Compile {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
