//! Error types for rule-table configuration problems
//!
//! Formatting itself never fails for ordinary numeric input. The only failure
//! mode is a malformed rule table: a list that does not end in an `Infinity`
//! catch-all, or an exact-match rule placed after a bound that shadows it.
//! Shipped tables are checked once by [`crate::rules::validate_all_tables`],
//! after which a match failure at call time is purely defensive.

use thiserror::Error;

/// A rule table is malformed or failed to match an input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No rule in the list matched the input value. For a well-formed list
    /// this is unreachable: the terminal `UpperBound(Infinity)` rule accepts
    /// every finite value.
    #[error("no formatting rule matched value {value}; rule list is missing an Infinity catch-all")]
    NoMatchingRule { value: f64 },

    /// The rule list has no rules at all.
    #[error("rule list is empty")]
    EmptyRuleList,

    /// The final rule is not an `UpperBound(Infinity)` catch-all.
    #[error("rule list does not end with an Infinity catch-all (last bound is {last})")]
    MissingCatchAll { last: f64 },

    /// An exact-match rule appears after an upper-bound rule that already
    /// covers its value, so it can never be selected.
    #[error("exact rule for {exact} is unreachable: shadowed by earlier upper bound {bound}")]
    ShadowedExactRule { exact: f64, bound: f64 },

    /// Upper bounds must be strictly increasing so every bucket is reachable.
    #[error("upper bounds must be strictly increasing ({prev} followed by {next})")]
    NonIncreasingBounds { prev: f64, next: f64 },
}
