//! Fixed strings used when assembling patterns and reporting matches

/// Separator placed between fragments of an alternation
pub const ALTERNATION_SEPARATOR: &str = "|";

/// Anchor prepended to each fragment by [`crate::join_anchored`]
pub const START_ANCHOR: &str = "^";

/// Header line of [`crate::RuleStore::describe`]
pub const RULE_SET_HEADER: &str = "Rule Set";

/// Label returned by first-match lookup when no rule matched
pub const NO_MATCH: &str = "no match";
