//! Rule-driven display formatting for DEX-style numeric values
//!
//! Converts a raw numeric value (and an optional currency-conversion rate)
//! into a locale-aware display string. Each display context is named by a
//! [`NumberType`] tag; the tag selects an ordered list of magnitude-bucketed
//! rules, and the first matching rule's options (precision, notation,
//! currency styling) drive the rendering. Boundary buckets render fixed
//! literals such as "<0.01" or ">999T".
//!
//! The whole pipeline is pure and stateless: rule tables are `static`, every
//! call is a read, and the library is safe to use from any thread.
//!
//! # Usage
//!
//! ```
//! use dexfmt::{Formatter, NumberType};
//!
//! let fmt = Formatter::new();
//! assert_eq!(fmt.format(Some(2_500_000.0), NumberType::TokenQuantityStats).unwrap(), "2.5M");
//! assert_eq!(fmt.format(Some(0.05), NumberType::FiatTokenPrice).unwrap(), "$0.0500");
//! assert_eq!(fmt.format(None, NumberType::FiatTokenPrice).unwrap(), "-");
//! ```
//!
//! # Failure semantics
//!
//! Ordinary numeric input never fails: missing and non-finite values render
//! as the placeholder. The only error is [`ConfigError`], raised when a rule
//! list is malformed; run [`validate_all_tables`] at startup (or rely on the
//! test suite) and treat a call-time error as a bug in a caller-supplied
//! rule list.

pub mod amount;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod options;
mod render;
pub mod rules;

pub use amount::{price_to_precise_float, TokenAmount};
pub use error::ConfigError;
pub use formatter::{format_number, DollarFormatOptions, Formatter};
pub use locale::Locale;
pub use options::{FormatOptions, Notation};
pub use rules::{
    select_rule, validate_all_tables, validate_rules, FormatterRule, HardCoded, NumberType,
    RuleMatch,
};
