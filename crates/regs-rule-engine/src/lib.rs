//! Regs Rule Engine - named regex fragments composed into one matcher
//!
//! Lexers for natural-language pipelines often carry hundreds of candidate
//! patterns. Writing them as one giant regex is unmaintainable; this crate
//! keeps them as an ordered list of named rules and folds them into a single
//! alternation on demand.
//!
//! # Architecture
//!
//! - **RuleStore**: ordered, growable storage of [`Rule`]s
//! - **RuleMatcher**: whole-set matching via one alternation, or first-match
//!   lookup rule by rule
//! - **PatternEngine**: the regex capability seam, backed by the `regex` crate
//!   by default
//!
//! # Example
//!
//! ```
//! use regs_rule_engine::{Rule, RuleStore};
//!
//! let mut store = RuleStore::new();
//! store.add(Rule::new("^Testing_", "A testing rule"));
//! store.add(Rule::new("(?i)^War", "Matched War"));
//! store.add(Rule::new("POSTAGE", "Matched Postage"));
//!
//! assert!(store.matches_any("WAR ON TEXT").unwrap());
//! assert_eq!(
//!     store.first_matching_rule("WAR ON TEXT").unwrap(),
//!     ("Rule Matched War".to_string(), true)
//! );
//! ```

pub mod assembly;
pub mod constants;
pub mod matcher;
pub mod pattern;
pub mod rule;
pub mod store;

// Re-export core types
pub use assembly::{join_alternatives, join_anchored};
pub use constants::*;
pub use matcher::{CompiledRuleSet, RuleMatcher};
pub use pattern::{MatchablePattern, PatternEngine, RegexEngine};
pub use regs_config::{ConfigError, RegexLimits, RegsConfig, StoreConfig};
pub use rule::Rule;
pub use store::RuleStore;

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for rule engine
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern `{pattern}`: {message}")]
    Compile { pattern: String, message: String },

    #[error("Pattern exceeds maximum length of {max} characters (got {length})")]
    PatternTooLong { length: usize, max: usize },

    #[error("Cannot join an empty pattern list")]
    EmptyPatternList,

    #[error("Index {index} out of range for rule store of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RuleError {
    /// True when the pattern itself was rejected by the engine
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            RuleError::Compile { .. } | RuleError::PatternTooLong { .. }
        )
    }
}
