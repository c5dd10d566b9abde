//! Locale separator settings
//!
//! Rust has no `Intl` facility, so the renderer takes its decimal point and
//! grouping separator from a small settings struct. The presets cover the
//! separator conventions the display layer actually switches between; full
//! CLDR-driven localization is out of scope.

use serde::{Deserialize, Serialize};

/// Separator characters used when rendering a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Character between the integer and fraction parts
    pub decimal_separator: char,
    /// Character between 3-digit integer groups
    pub grouping_separator: char,
}

impl Locale {
    /// "1,234,567.89"
    pub const EN_US: Locale = Locale {
        decimal_separator: '.',
        grouping_separator: ',',
    };

    /// "1.234.567,89"
    pub const DE_DE: Locale = Locale {
        decimal_separator: ',',
        grouping_separator: '.',
    };

    /// "1 234 567,89" (non-breaking spaces)
    pub const FR_FR: Locale = Locale {
        decimal_separator: ',',
        grouping_separator: '\u{a0}',
    };
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN_US
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(Locale::default(), Locale::EN_US);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Locale::DE_DE).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::DE_DE);
    }
}
