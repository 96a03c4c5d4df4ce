//! Pattern string assembly without compilation

use crate::constants::{ALTERNATION_SEPARATOR, START_ANCHOR};
use crate::{Result, RuleError};

/// Join fragments into one alternation, e.g. `["a", "b"]` becomes `"a|b"`
///
/// Fragments are used as given; any `^`/`$` anchors must already be part of
/// them.
pub fn join_alternatives<S: AsRef<str>>(patterns: &[S]) -> Result<String> {
    if patterns.is_empty() {
        return Err(RuleError::EmptyPatternList);
    }

    let fragments: Vec<&str> = patterns.iter().map(AsRef::as_ref).collect();
    Ok(fragments.join(ALTERNATION_SEPARATOR))
}

/// Join fragments into one alternation, anchoring each at the start
///
/// `["a", "b"]` becomes `"^a|^b"`.
pub fn join_anchored<S: AsRef<str>>(patterns: &[S]) -> Result<String> {
    if patterns.is_empty() {
        return Err(RuleError::EmptyPatternList);
    }

    let fragments: Vec<String> = patterns
        .iter()
        .map(|p| format!("{}{}", START_ANCHOR, p.as_ref()))
        .collect();
    Ok(fragments.join(ALTERNATION_SEPARATOR))
}
