//! Ordered, growable storage for rules
//!
//! Capacity is tracked explicitly so growth follows the configured policy
//! rather than whatever `Vec` would choose on its own.

use crate::constants::RULE_SET_HEADER;
use crate::{Result, Rule, RuleError, StoreConfig};
use std::fmt;
use tracing::trace;

/// An ordered collection of rules
///
/// Insertion order is significant: it is the order of the combined
/// alternation and the precedence of first-match lookup.
#[derive(Debug, Clone)]
pub struct RuleStore {
    /// Live rules, `elements.len()` is the logical size
    elements: Vec<Rule>,

    /// Logical capacity as computed by the growth policy
    capacity: usize,

    config: StoreConfig,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    /// Create an empty store with the default growth policy
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            capacity: 0,
            config: StoreConfig::default(),
        }
    }

    /// Create an empty store with a custom growth policy
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            elements: Vec::new(),
            capacity: 0,
            config,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Append one rule
    pub fn add(&mut self, rule: Rule) {
        self.grow_by(1);
        self.elements.push(rule);
    }

    /// Append a batch of rules, keeping their relative order
    ///
    /// Storage grows at most once for the whole batch.
    pub fn add_many<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Rule>,
        I::IntoIter: ExactSizeIterator,
    {
        let rules = rules.into_iter();
        self.grow_by(rules.len());
        self.elements.extend(rules);
    }

    /// Append bare patterns, naming each by its index within this batch
    ///
    /// Numbering restarts at "0" on every call, so two calls produce
    /// duplicate names.
    pub fn add_from_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: ExactSizeIterator,
        S: Into<String>,
    {
        let patterns = patterns.into_iter();
        self.grow_by(patterns.len());
        self.elements.extend(
            patterns
                .enumerate()
                .map(|(i, pattern)| Rule::new(pattern, i.to_string())),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every rule and release the backing storage
    pub fn clear(&mut self) {
        self.elements = Vec::new();
        self.capacity = 0;
    }

    /// Rule at `index`, rejecting anything outside `0..len()`
    pub fn get(&self, index: usize) -> Result<&Rule> {
        if !self.within_range(index) {
            return Err(RuleError::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        Ok(&self.elements[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.elements.iter()
    }

    /// Independent copy of the live rules, in insertion order
    pub fn snapshot(&self) -> Vec<Rule> {
        self.elements.clone()
    }

    /// Human-readable listing: a header line, then one line per rule
    pub fn describe(&self) -> String {
        let lines: Vec<String> = self.elements.iter().map(Rule::to_string).collect();
        format!("{}\n{}", RULE_SET_HEADER, lines.join("\n"))
    }

    fn within_range(&self, index: usize) -> bool {
        index < self.elements.len()
    }

    /// Grow when adding `n` rules would reach the current capacity
    fn grow_by(&mut self, n: usize) {
        if self.elements.len() + n >= self.capacity {
            let target = self.config.growth_factor * (self.capacity + n) as f64;
            self.resize(target.ceil() as usize);
        }
        debug_assert!(self.elements.len() + n <= self.capacity);
    }

    fn resize(&mut self, capacity: usize) {
        trace!(from = self.capacity, to = capacity, "resizing rule storage");
        self.elements
            .reserve_exact(capacity.saturating_sub(self.elements.len()));
        self.capacity = capacity;
    }
}

impl fmt::Display for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<'a> IntoIterator for &'a RuleStore {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
