//! Matching a rule store against text
//!
//! Whole-set queries fold every rule into one alternation and compile it
//! fresh on each call, so results always reflect the store's current
//! contents. First-match lookup compiles rules one at a time in insertion
//! order and shares no work with the whole-set path.

use crate::constants::NO_MATCH;
use crate::pattern::{MatchablePattern, PatternEngine, RegexEngine};
use crate::{join_alternatives, RegsConfig, Result, Rule, RuleStore};
use tracing::{debug, trace};

/// A store's rules compiled into a single alternation
///
/// An empty store compiles to no pattern at all, which matches nothing.
#[derive(Debug, Clone)]
pub struct CompiledRuleSet<P> {
    source: String,
    rule_count: usize,
    pattern: Option<P>,
}

impl<P: MatchablePattern> CompiledRuleSet<P> {
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    /// The combined alternation source, empty for an empty store
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    pub fn pattern(&self) -> Option<&P> {
        self.pattern.as_ref()
    }
}

/// Runs match queries against a [`RuleStore`]
#[derive(Debug, Clone, Default)]
pub struct RuleMatcher<E = RegexEngine> {
    engine: E,
}

impl RuleMatcher {
    /// Matcher using the default regex engine and limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher using the regex limits from `config`
    pub fn from_config(config: &RegsConfig) -> Result<Self> {
        Ok(Self {
            engine: RegexEngine::new(config.regex)?,
        })
    }
}

impl<E: PatternEngine> RuleMatcher<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Compile every rule in the store into one alternation
    ///
    /// Fails if the joined source is invalid, even when each fragment
    /// compiles on its own.
    pub fn compile_pattern(&self, store: &RuleStore) -> Result<CompiledRuleSet<E::Pattern>> {
        if store.is_empty() {
            return Ok(CompiledRuleSet {
                source: String::new(),
                rule_count: 0,
                pattern: None,
            });
        }

        let patterns: Vec<&str> = store.iter().map(Rule::pattern).collect();
        let source = join_alternatives(&patterns)?;
        debug!(
            rules = patterns.len(),
            length = source.len(),
            "compiling rule alternation"
        );
        let pattern = self.engine.compile(&source)?;

        Ok(CompiledRuleSet {
            source,
            rule_count: patterns.len(),
            pattern: Some(pattern),
        })
    }

    /// True if any rule matches anywhere in `text`
    ///
    /// An empty store never matches and never fails.
    pub fn matches_any(&self, store: &RuleStore, text: &str) -> Result<bool> {
        if store.is_empty() {
            return Ok(false);
        }
        Ok(self.compile_pattern(store)?.is_match(text))
    }

    /// The first rule, in insertion order, whose own pattern matches `text`
    pub fn first_match(&self, store: &RuleStore, text: &str) -> Result<Option<Rule>> {
        for rule in store {
            let pattern = self.engine.compile(rule.pattern())?;
            if pattern.is_match(text) {
                trace!(rule = rule.name(), "rule matched");
                return Ok(Some(rule.clone()));
            }
        }
        Ok(None)
    }

    /// First-match lookup as a label and found flag
    ///
    /// Returns `("Rule <name>", true)` for a hit and `("no match", false)`
    /// otherwise.
    pub fn first_matching_rule(&self, store: &RuleStore, text: &str) -> Result<(String, bool)> {
        Ok(match self.first_match(store, text)? {
            Some(rule) => (format!("Rule {}", rule.name()), true),
            None => (NO_MATCH.to_string(), false),
        })
    }
}

/// Shorthands using the default [`RuleMatcher`]
impl RuleStore {
    pub fn compile_pattern(&self) -> Result<CompiledRuleSet<regex::Regex>> {
        RuleMatcher::new().compile_pattern(self)
    }

    pub fn matches_any(&self, text: &str) -> Result<bool> {
        RuleMatcher::new().matches_any(self, text)
    }

    pub fn first_matching_rule(&self, text: &str) -> Result<(String, bool)> {
        RuleMatcher::new().first_matching_rule(self, text)
    }
}
