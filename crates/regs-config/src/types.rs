use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegsConfig {
    /// Rule storage growth policy
    #[serde(default)]
    pub store: StoreConfig,

    /// Limits for pattern compilation
    #[serde(default)]
    pub regex: RegexLimits,
}

impl RegsConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.regex.validate()
    }
}

/// Storage growth policy for a rule store
///
/// When an insert of `n` rules would bring the size up to the current
/// capacity, the new capacity is `ceil(growth_factor * (capacity + n))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Capacity multiplier applied on growth (must be > 1.0)
    #[serde(default = "default_growth_factor")]
    pub growth_factor: f64,

    /// Fill ratio below which storage may shrink, 0 means never.
    ///
    /// Reserved: validated and carried, but no operation shrinks storage yet.
    #[serde(default = "default_shrink_factor")]
    pub shrink_factor: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            growth_factor: default_growth_factor(),
            shrink_factor: default_shrink_factor(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(ConfigError::InvalidGrowthFactor(self.growth_factor));
        }
        if !self.shrink_factor.is_finite() || !(0.0..1.0).contains(&self.shrink_factor) {
            return Err(ConfigError::InvalidShrinkFactor(self.shrink_factor));
        }
        Ok(())
    }
}

/// Limits applied by the regex-backed engine to every pattern it compiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegexLimits {
    /// Longest pattern source accepted, in bytes
    #[serde(default = "default_max_pattern_length")]
    pub max_pattern_length: usize,

    /// Compiled program size limit, in bytes
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,

    /// Lazy DFA cache size limit, in bytes
    #[serde(default = "default_dfa_size_limit")]
    pub dfa_size_limit: usize,
}

impl Default for RegexLimits {
    fn default() -> Self {
        Self {
            max_pattern_length: default_max_pattern_length(),
            size_limit: default_size_limit(),
            dfa_size_limit: default_dfa_size_limit(),
        }
    }
}

impl RegexLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_pattern_length", self.max_pattern_length),
            ("size_limit", self.size_limit),
            ("dfa_size_limit", self.dfa_size_limit),
        ];
        match fields.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::InvalidLimit { name: *name }),
            None => Ok(()),
        }
    }
}

fn default_growth_factor() -> f64 {
    2.0
}

fn default_shrink_factor() -> f64 {
    0.25
}

// Combined alternations of hundreds of rules get long, so this is generous.
fn default_max_pattern_length() -> usize {
    1_000_000
}

fn default_size_limit() -> usize {
    10_000_000 // 10MB
}

fn default_dfa_size_limit() -> usize {
    2_000_000 // 2MB
}
