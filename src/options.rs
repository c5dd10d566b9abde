//! Formatting option presets
//!
//! A [`FormatOptions`] is a semantic formatting directive: which notation to
//! use, how many fraction or significant digits to keep, whether to group the
//! integer part, and whether the value is currency-styled. The named presets
//! below are the fixed vocabulary the rule tables in [`crate::rules`] are
//! built from.
//!
//! Digit resolution follows the convention the display layer was written
//! against: when either significant-digit limit is set, significant digits
//! win and the fraction-digit limits are ignored.

/// How the magnitude of a number is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Plain decimal, e.g. "1,234.56"
    Standard,
    /// Abbreviated with K/M/B/T suffixes, e.g. "2.5M"
    Compact,
    /// Mantissa-exponent, e.g. "1.000000E16"
    Scientific,
}

/// Semantic formatting directive applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub notation: Notation,
    /// Fraction part is zero-padded up to this many digits
    pub min_fraction_digits: u8,
    /// Fraction part is rounded to at most this many digits
    pub max_fraction_digits: u8,
    /// When set, trailing zeros pad the output up to this many significant digits
    pub min_significant_digits: Option<u8>,
    /// When set, the value is rounded to this many significant digits and the
    /// fraction-digit limits are ignored
    pub max_significant_digits: Option<u8>,
    /// Group the integer part in threes
    pub grouping: bool,
    /// Render with the formatter's currency symbol; also makes rule matching
    /// and rendering apply the caller's conversion rate
    pub currency: bool,
}

const BASE: FormatOptions = FormatOptions {
    notation: Notation::Standard,
    min_fraction_digits: 0,
    max_fraction_digits: 3,
    min_significant_digits: None,
    max_significant_digits: None,
    grouping: true,
    currency: false,
};

pub const NO_DECIMALS: FormatOptions = FormatOptions {
    max_fraction_digits: 0,
    ..BASE
};

pub const NO_DECIMALS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..NO_DECIMALS
};

pub const TWO_DECIMALS: FormatOptions = FormatOptions {
    min_fraction_digits: 2,
    max_fraction_digits: 2,
    ..BASE
};

pub const TWO_DECIMALS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..TWO_DECIMALS
};

pub const TWO_DECIMALS_NO_TRAILING_ZEROS: FormatOptions = FormatOptions {
    max_fraction_digits: 2,
    ..BASE
};

pub const TWO_DECIMALS_NO_TRAILING_ZEROS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..TWO_DECIMALS_NO_TRAILING_ZEROS
};

pub const THREE_DECIMALS: FormatOptions = FormatOptions {
    min_fraction_digits: 3,
    max_fraction_digits: 3,
    ..BASE
};

pub const THREE_DECIMALS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..THREE_DECIMALS
};

pub const THREE_DECIMALS_NO_TRAILING_ZEROS: FormatOptions = FormatOptions {
    max_fraction_digits: 3,
    ..BASE
};

pub const THREE_DECIMALS_NO_TRAILING_ZEROS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..THREE_DECIMALS_NO_TRAILING_ZEROS
};

pub const FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN: FormatOptions = FormatOptions {
    min_fraction_digits: 2,
    max_fraction_digits: 5,
    ..BASE
};

pub const FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN_NO_COMMAS: FormatOptions = FormatOptions {
    grouping: false,
    ..FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN
};

pub const EIGHT_DECIMALS_CURRENCY: FormatOptions = FormatOptions {
    min_fraction_digits: 2,
    max_fraction_digits: 8,
    currency: true,
    ..BASE
};

pub const SHORTHAND_TWO_DECIMALS: FormatOptions = FormatOptions {
    notation: Notation::Compact,
    min_fraction_digits: 2,
    max_fraction_digits: 2,
    ..BASE
};

pub const SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS: FormatOptions = FormatOptions {
    notation: Notation::Compact,
    max_fraction_digits: 2,
    ..BASE
};

pub const SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS_CURRENCY: FormatOptions = FormatOptions {
    currency: true,
    ..SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS
};

pub const SHORTHAND_ONE_DECIMAL: FormatOptions = FormatOptions {
    notation: Notation::Compact,
    min_fraction_digits: 1,
    max_fraction_digits: 1,
    ..BASE
};

pub const SHORTHAND_CURRENCY_TWO_DECIMALS: FormatOptions = FormatOptions {
    currency: true,
    ..SHORTHAND_TWO_DECIMALS
};

pub const SHORTHAND_CURRENCY_ONE_DECIMAL: FormatOptions = FormatOptions {
    currency: true,
    ..SHORTHAND_ONE_DECIMAL
};

pub const SIX_SIG_FIGS_TWO_DECIMALS: FormatOptions = FormatOptions {
    min_significant_digits: Some(3),
    max_significant_digits: Some(6),
    min_fraction_digits: 2,
    max_fraction_digits: 2,
    ..BASE
};

pub const SIX_SIG_FIGS_NO_COMMAS: FormatOptions = FormatOptions {
    max_significant_digits: Some(6),
    grouping: false,
    ..BASE
};

pub const SIX_SIG_FIGS_TWO_DECIMALS_NO_COMMAS: FormatOptions = FormatOptions {
    grouping: false,
    ..SIX_SIG_FIGS_TWO_DECIMALS
};

pub const ONE_SIG_FIG_CURRENCY: FormatOptions = FormatOptions {
    min_significant_digits: Some(1),
    max_significant_digits: Some(1),
    currency: true,
    ..BASE
};

pub const THREE_SIG_FIGS_CURRENCY: FormatOptions = FormatOptions {
    min_significant_digits: Some(3),
    max_significant_digits: Some(3),
    currency: true,
    ..BASE
};

pub const SEVEN_SIG_FIGS_SCI_NOTATION_CURRENCY: FormatOptions = FormatOptions {
    notation: Notation::Scientific,
    min_significant_digits: Some(7),
    max_significant_digits: Some(7),
    currency: true,
    ..BASE
};

impl FormatOptions {
    /// True when either significant-digit limit is set, in which case the
    /// fraction-digit limits are ignored by the renderer.
    pub(crate) fn uses_significant_digits(&self) -> bool {
        self.min_significant_digits.is_some() || self.max_significant_digits.is_some()
    }
}
