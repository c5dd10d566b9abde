//! Token amount and price adapters
//!
//! On-chain amounts arrive as integer raw units plus a decimal count. These
//! adapters recover an `f64` with the precision the price formatters need:
//! the exact quotient is fine for larger values, but below 0.1 the leading
//! zeros eat the available digits, so small values are re-derived at six
//! significant digits instead.

use crate::render::{round_to_fraction, round_to_significant};

/// A token-denominated amount: integer raw units scaled by `10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    raw: u128,
    decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: u128, decimals: u8) -> Self {
        TokenAmount { raw, decimals }
    }

    /// The exact quotient `raw / 10^decimals`.
    pub fn to_exact(&self) -> f64 {
        self.raw as f64 / 10f64.powi(self.decimals as i32)
    }

    /// The amount rounded to `digits` significant digits.
    pub fn to_significant(&self, digits: usize) -> f64 {
        round_to_significant(self.to_exact(), digits)
    }

    /// Float with the precision needed for price formatting: exact for
    /// amounts at or above 0.1, six significant digits below.
    pub fn to_precise_float(&self) -> f64 {
        let exact = self.to_exact();
        if exact < 0.1 {
            self.to_significant(6)
        } else {
            exact
        }
    }
}

/// Reduce a raw price ratio to display precision: nine fraction digits for
/// prices at or above 0.1, six significant digits below.
pub fn price_to_precise_float(price: Option<f64>) -> Option<f64> {
    let price = price?;
    let fixed = round_to_fraction(price, 9);
    if fixed < 0.1 {
        Some(round_to_significant(price, 6))
    } else {
        Some(fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_exact() {
        let amount = TokenAmount::new(1_500_000_000_000_000_000, 18);
        assert_eq!(amount.to_exact(), 1.5);
    }

    #[test]
    fn test_to_significant_truncates_long_quotients() {
        // 1/3 of a token at 18 decimals
        let amount = TokenAmount::new(333_333_333_333_333_333, 18);
        assert_eq!(amount.to_significant(6), 0.333333);
    }

    #[test]
    fn test_precise_float_uses_sig_figs_below_point_one() {
        let small = TokenAmount::new(12_345_678, 12);
        // exact would be 0.000012345678; six sig figs keeps 0.0000123457
        assert_eq!(small.to_precise_float(), 0.0000123457);

        let large = TokenAmount::new(123_456_789, 6);
        assert_eq!(large.to_precise_float(), 123.456789);
    }

    #[test]
    fn test_price_to_precise_float() {
        assert_eq!(price_to_precise_float(None), None);
        assert_eq!(price_to_precise_float(Some(1234.56789)), Some(1234.56789));
        // nine fraction digits for ordinary prices
        assert_eq!(
            price_to_precise_float(Some(0.123456789123)),
            Some(0.123456789)
        );
        // six significant digits below 0.1
        assert_eq!(
            price_to_precise_float(Some(0.000012345678)),
            Some(0.0000123457)
        );
    }
}
