//! Formatting entry points
//!
//! [`Formatter`] carries the display context (locale separators, placeholder,
//! currency symbol) and turns a nullable value plus a [`NumberType`] into the
//! final display string. It also hosts the two ad-hoc formatters the swap and
//! explore screens use outside the rule tables: [`Formatter::format_dollar`]
//! and [`Formatter::format_transaction_amount`].
//!
//! Missing values are not errors: `None` yields the placeholder. Non-finite
//! values also yield the placeholder rather than leaking "NaN" into the UI.

use crate::amount::TokenAmount;
use crate::error::ConfigError;
use crate::locale::Locale;
use crate::options::{FormatOptions, Notation};
use crate::render::{render, round_to_fraction, round_to_significant, to_exponential, to_precision};
use crate::rules::{select_rule, FormatterRule, HardCoded, NumberType};

/// Display context for formatting calls.
///
/// # Examples
///
/// ```
/// use dexfmt::{Formatter, NumberType};
///
/// let fmt = Formatter::new();
/// assert_eq!(fmt.format(Some(0.004), NumberType::TokenQuantityStats).unwrap(), "<0.01");
/// assert_eq!(fmt.format(Some(2_500_000.0), NumberType::TokenQuantityStats).unwrap(), "2.5M");
/// assert_eq!(fmt.format(None, NumberType::TokenQuantityStats).unwrap(), "-");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: Locale,
    placeholder: String,
    currency_symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter {
            locale: Locale::EN_US,
            placeholder: "-".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Formatter::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// String returned for missing values (default "-").
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Symbol prefixed to currency-styled output (default "$").
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Format a value using the rule table for `number_type`.
    pub fn format(
        &self,
        input: Option<f64>,
        number_type: NumberType,
    ) -> Result<String, ConfigError> {
        self.format_rules(input, number_type.rules(), None)
    }

    /// Format a token-denominated value in display currency: the rate
    /// multiplies the input before magnitude matching and before rendering,
    /// but only for currency-styled rules.
    pub fn format_with_rate(
        &self,
        input: Option<f64>,
        number_type: NumberType,
        conversion_rate: f64,
    ) -> Result<String, ConfigError> {
        self.format_rules(input, number_type.rules(), Some(conversion_rate))
    }

    /// Format against a caller-supplied rule list instead of a named table.
    pub fn format_rules(
        &self,
        input: Option<f64>,
        rules: &[FormatterRule],
        conversion_rate: Option<f64>,
    ) -> Result<String, ConfigError> {
        let value = match input {
            Some(value) => value,
            None => return Ok(self.placeholder.clone()),
        };
        if !value.is_finite() {
            tracing::warn!(value, "non-finite input, returning placeholder");
            return Ok(self.placeholder.clone());
        }

        let rule = select_rule(value, rules, conversion_rate)?;
        let (value, symbol) = if rule.options.currency {
            let converted = conversion_rate.map_or(value, |rate| value * rate);
            (converted, self.currency_symbol.as_str())
        } else {
            (value, "")
        };

        let formatted = match rule.hard_coded {
            HardCoded::None => render(value, &rule.options, &self.locale, symbol),
            HardCoded::Output(output) => output.to_string(),
            HardCoded::Input {
                value: literal,
                prefix,
            } => {
                let rendered = render(literal, &rule.options, &self.locale, symbol);
                format!("{}{}", prefix, rendered)
            }
        };
        Ok(formatted)
    }

    /// Format a token amount: extracts a float at six significant digits and
    /// delegates to [`Formatter::format`].
    pub fn format_currency_amount(
        &self,
        amount: Option<&TokenAmount>,
        number_type: NumberType,
    ) -> Result<String, ConfigError> {
        self.format(amount.map(|a| a.to_significant(6)), number_type)
    }

    /// Format a USD-or-equivalent value for explore tables and stats headers.
    ///
    /// Prices get banded precision (exponential below 1e-6, three significant
    /// figures for small and very large values, three decimals in the
    /// stablecoin band, grouped two decimals otherwise). Volume-style amounts
    /// get a "<0.000001" floor and compact M/B abbreviations.
    pub fn format_dollar(&self, num: Option<f64>, opts: &DollarFormatOptions) -> String {
        let sym = &self.currency_symbol;
        let num = match num {
            Some(n) if n == 0.0 => return format!("{}0.00", sym),
            Some(n) if n.is_finite() => n,
            _ => return self.placeholder.clone(),
        };

        if opts.is_price {
            if num < 0.000001 {
                return format!("{}{}", sym, to_exponential(num, 2));
            }
            if num < 0.1 || num > 1e6 {
                return format!("{}{}", sym, to_precision(num, 3));
            }
            // stablecoin-range values show two decimals in explore tables for
            // readability, three elsewhere
            let stable_bound = if opts.less_precise_stablecoin_values {
                0.9995
            } else {
                1.05
            };
            if num < stable_bound {
                return format!("{}{:.3}", sym, num);
            }
            return self.fixed(num, 2, 2, sym);
        }

        // volume-style amounts: market cap, TVL, totals
        if num < 0.000001 {
            return format!("{}<0.000001", sym);
        }
        if num < 0.1 {
            return format!("{}{}", sym, to_precision(num, 3));
        }
        if num < 1.05 {
            return format!("{}{:.3}", sym, num);
        }
        let mantissa = if num > 1000.0 { 2 } else { opts.digits };
        if opts.round {
            let options = FormatOptions {
                notation: Notation::Compact,
                min_fraction_digits: mantissa,
                max_fraction_digits: mantissa,
                min_significant_digits: None,
                max_significant_digits: None,
                grouping: true,
                currency: true,
            };
            render(num, &options, &self.locale, sym)
        } else {
            self.fixed(num, mantissa, mantissa, sym)
        }
    }

    /// Format a token quantity for transaction review screens.
    ///
    /// Zero renders as "0.00" and a missing value as the empty string, so the
    /// input box stays blank. Very large magnitudes (at or above
    /// `10^(max_digits - 1)`) switch to exponential form.
    pub fn format_transaction_amount(&self, num: Option<f64>, max_digits: u32) -> String {
        let num = match num {
            Some(n) if n == 0.0 => return "0.00".to_string(),
            Some(n) if n.is_finite() => n,
            _ => return String::new(),
        };

        if num < 0.00001 {
            return "<0.00001".to_string();
        }
        if num < 1.0 {
            return self.fixed(round_to_fraction(num, 5), 2, 5, "");
        }
        if num < 10000.0 {
            return self.fixed(round_to_significant(num, 6), 2, 6, "");
        }
        if num < 1e6 {
            return self.fixed(num, 2, 2, "");
        }
        if num >= 10f64.powi(max_digits.saturating_sub(1) as i32) {
            return to_exponential(num, max_digits.saturating_sub(3) as usize);
        }
        self.fixed(num, 2, 2, "")
    }

    /// Grouped standard notation with explicit fraction bounds.
    fn fixed(&self, value: f64, min_fraction: u8, max_fraction: u8, symbol: &str) -> String {
        let options = FormatOptions {
            notation: Notation::Standard,
            min_fraction_digits: min_fraction,
            max_fraction_digits: max_fraction,
            min_significant_digits: None,
            max_significant_digits: None,
            grouping: true,
            currency: !symbol.is_empty(),
        };
        render(value, &options, &self.locale, symbol)
    }
}

/// Options for [`Formatter::format_dollar`].
#[derive(Debug, Clone, Copy)]
pub struct DollarFormatOptions {
    /// Whether the amount is a price (banded precision) or a volume-style
    /// stat (compact abbreviation)
    pub is_price: bool,
    /// Show two decimals instead of three in the stablecoin price band
    pub less_precise_stablecoin_values: bool,
    /// Fraction digits for small non-price amounts
    pub digits: u8,
    /// Abbreviate large non-price amounts (M/B shorthand)
    pub round: bool,
}

impl Default for DollarFormatOptions {
    fn default() -> Self {
        DollarFormatOptions {
            is_price: false,
            less_precise_stablecoin_values: false,
            digits: 2,
            round: true,
        }
    }
}

/// Format with the default context (en-US, "-" placeholder, "$" symbol).
///
/// # Examples
///
/// ```
/// use dexfmt::{format_number, NumberType};
///
/// assert_eq!(format_number(Some(42.567), NumberType::TokenQuantityStats).unwrap(), "42.57");
/// ```
pub fn format_number(input: Option<f64>, number_type: NumberType) -> Result<String, ConfigError> {
    Formatter::new().format(input, number_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_missing_input() {
        let fmt = Formatter::new();
        for number_type in NumberType::ALL {
            assert_eq!(fmt.format(None, number_type).unwrap(), "-");
        }
        let fmt = Formatter::new().with_placeholder("N/A");
        assert_eq!(fmt.format(None, NumberType::TokenNonTx).unwrap(), "N/A");
    }

    #[test]
    fn test_placeholder_for_non_finite_input() {
        let fmt = Formatter::new();
        assert_eq!(fmt.format(Some(f64::NAN), NumberType::TokenNonTx).unwrap(), "-");
        assert_eq!(
            fmt.format(Some(f64::INFINITY), NumberType::FiatTokenPrice).unwrap(),
            "-"
        );
    }

    #[test]
    fn test_token_quantity_stats_scenarios() {
        let fmt = Formatter::new();
        let t = NumberType::TokenQuantityStats;
        assert_eq!(fmt.format(Some(0.0), t).unwrap(), "-");
        assert_eq!(fmt.format(Some(0.004), t).unwrap(), "<0.01");
        assert_eq!(fmt.format(Some(42.567), t).unwrap(), "42.57");
        assert_eq!(fmt.format(Some(2_500_000.0), t).unwrap(), "2.5M");
    }

    #[test]
    fn test_token_non_tx_scenarios() {
        let fmt = Formatter::new();
        let t = NumberType::TokenNonTx;
        assert_eq!(fmt.format(Some(0.0), t).unwrap(), "0");
        assert_eq!(fmt.format(Some(0.0004), t).unwrap(), "<0.001");
        assert_eq!(fmt.format(Some(0.5), t).unwrap(), "0.500");
        assert_eq!(fmt.format(Some(1234.56), t).unwrap(), "1,234.56");
        assert_eq!(fmt.format(Some(1e14), t).unwrap(), "100.00T");
        assert_eq!(fmt.format(Some(2e15), t).unwrap(), ">999T");
    }

    #[test]
    fn test_fiat_token_price_scenarios() {
        let fmt = Formatter::new();
        let t = NumberType::FiatTokenPrice;
        assert_eq!(fmt.format(Some(0.0), t).unwrap(), "$0.00");
        assert_eq!(fmt.format(Some(1.2e-9), t).unwrap(), "<$0.00000001");
        assert_eq!(fmt.format(Some(0.05), t).unwrap(), "$0.0500");
        assert_eq!(fmt.format(Some(42.34), t).unwrap(), "$42.34");
        assert_eq!(fmt.format(Some(1_234_567.0), t).unwrap(), "$1.23M");
        assert_eq!(fmt.format(Some(2e16), t).unwrap(), "$2.000000E16");
    }

    #[test]
    fn test_swap_trade_amount_scenarios() {
        let fmt = Formatter::new();
        let t = NumberType::SwapTradeAmount;
        assert_eq!(fmt.format(Some(0.05), t).unwrap(), "0.05");
        assert_eq!(fmt.format(Some(0.123456789), t).unwrap(), "0.12346");
        assert_eq!(fmt.format(Some(1234.5678), t).unwrap(), "1234.57");
        assert_eq!(fmt.format(Some(12345678.0), t).unwrap(), "12345700");
    }

    #[test]
    fn test_boundary_is_strict() {
        let fmt = Formatter::new();
        let t = NumberType::TokenNonTx;
        // 0.999999 takes the three-decimal bucket, 1.0 the two-decimal one
        assert_eq!(fmt.format(Some(0.999999), t).unwrap(), "1.000");
        assert_eq!(fmt.format(Some(1.0), t).unwrap(), "1.00");
    }

    #[test]
    fn test_conversion_rate_converts_currency_output() {
        let fmt = Formatter::new();
        let result = fmt
            .format_with_rate(Some(10.0), NumberType::FiatTokenPrice, 2.5)
            .unwrap();
        assert_eq!(result, "$25.00");

        // caller's symbol wins over the default
        let fmt = Formatter::new().with_currency_symbol("€");
        let result = fmt
            .format_with_rate(Some(10.0), NumberType::FiatTokenPrice, 2.5)
            .unwrap();
        assert_eq!(result, "€25.00");
    }

    #[test]
    fn test_conversion_rate_ignored_for_token_rules() {
        let fmt = Formatter::new();
        let converted = fmt
            .format_with_rate(Some(42.567), NumberType::TokenNonTx, 2.5)
            .unwrap();
        assert_eq!(converted, fmt.format(Some(42.567), NumberType::TokenNonTx).unwrap());
    }

    #[test]
    fn test_caller_supplied_rule_list() {
        use crate::options::{NO_DECIMALS, SHORTHAND_ONE_DECIMAL, TWO_DECIMALS};
        let rules = &[
            FormatterRule::exact(0.0, NO_DECIMALS),
            FormatterRule::below(1e6, TWO_DECIMALS),
            FormatterRule::catch_all(SHORTHAND_ONE_DECIMAL),
        ];
        let fmt = Formatter::new();
        assert_eq!(fmt.format_rules(Some(12.3), rules, None).unwrap(), "12.30");
        assert_eq!(fmt.format_rules(Some(5e6), rules, None).unwrap(), "5.0M");
    }

    #[test]
    fn test_unmatched_custom_list_fails() {
        use crate::options::TWO_DECIMALS;
        let rules = &[FormatterRule::below(1.0, TWO_DECIMALS)];
        let fmt = Formatter::new();
        assert!(fmt.format_rules(Some(5.0), rules, None).is_err());
    }

    #[test]
    fn test_locale_flows_through() {
        let fmt = Formatter::new().with_locale(Locale::DE_DE);
        assert_eq!(
            fmt.format(Some(1234.56), NumberType::TokenNonTx).unwrap(),
            "1.234,56"
        );
    }

    #[test]
    fn test_format_dollar_prices() {
        let fmt = Formatter::new();
        let price = DollarFormatOptions {
            is_price: true,
            ..Default::default()
        };
        assert_eq!(fmt.format_dollar(Some(0.0), &price), "$0.00");
        assert_eq!(fmt.format_dollar(None, &price), "-");
        assert_eq!(fmt.format_dollar(Some(3.4e-7), &price), "$3.40e-7");
        assert_eq!(fmt.format_dollar(Some(0.052345), &price), "$0.0523");
        assert_eq!(fmt.format_dollar(Some(0.5), &price), "$0.500");
        assert_eq!(fmt.format_dollar(Some(1234.567), &price), "$1,234.57");
        assert_eq!(fmt.format_dollar(Some(1_234_567.0), &price), "$1.23e+6");
    }

    #[test]
    fn test_format_dollar_stablecoin_band() {
        let fmt = Formatter::new();
        let precise = DollarFormatOptions {
            is_price: true,
            ..Default::default()
        };
        let less_precise = DollarFormatOptions {
            is_price: true,
            less_precise_stablecoin_values: true,
            ..Default::default()
        };
        assert_eq!(fmt.format_dollar(Some(1.001), &precise), "$1.001");
        assert_eq!(fmt.format_dollar(Some(1.001), &less_precise), "$1.00");
    }

    #[test]
    fn test_format_dollar_volumes() {
        let fmt = Formatter::new();
        let volume = DollarFormatOptions::default();
        assert_eq!(fmt.format_dollar(Some(1e-7), &volume), "$<0.000001");
        assert_eq!(fmt.format_dollar(Some(0.05), &volume), "$0.0500");
        assert_eq!(fmt.format_dollar(Some(0.5), &volume), "$0.500");
        assert_eq!(fmt.format_dollar(Some(1_234_567.0), &volume), "$1.23M");
        assert_eq!(fmt.format_dollar(Some(1234.5), &volume), "$1.23K");
        assert_eq!(fmt.format_dollar(Some(500.0), &volume), "$500.00");

        let unrounded = DollarFormatOptions {
            round: false,
            ..Default::default()
        };
        assert_eq!(fmt.format_dollar(Some(1_234_567.0), &unrounded), "$1,234,567.00");
    }

    #[test]
    fn test_format_transaction_amount() {
        let fmt = Formatter::new();
        assert_eq!(fmt.format_transaction_amount(Some(0.0), 9), "0.00");
        assert_eq!(fmt.format_transaction_amount(None, 9), "");
        assert_eq!(fmt.format_transaction_amount(Some(0.000001), 9), "<0.00001");
        assert_eq!(fmt.format_transaction_amount(Some(0.123456), 9), "0.12346");
        assert_eq!(fmt.format_transaction_amount(Some(0.5), 9), "0.50");
        assert_eq!(fmt.format_transaction_amount(Some(42.0), 9), "42.00");
        assert_eq!(fmt.format_transaction_amount(Some(1234.5678), 9), "1,234.57");
        assert_eq!(fmt.format_transaction_amount(Some(20000.123), 9), "20,000.12");
        assert_eq!(fmt.format_transaction_amount(Some(2_000_000.0), 9), "2,000,000.00");
        assert_eq!(fmt.format_transaction_amount(Some(5e8), 9), "5.000000e+8");
    }

    #[test]
    fn test_format_currency_amount() {
        let fmt = Formatter::new();
        let amount = TokenAmount::new(1_500_000_000_000_000_000, 18);
        assert_eq!(
            fmt.format_currency_amount(Some(&amount), NumberType::TokenNonTx).unwrap(),
            "1.50"
        );
        assert_eq!(
            fmt.format_currency_amount(None, NumberType::TokenNonTx).unwrap(),
            "-"
        );
    }

    #[test]
    fn test_reformatting_is_stable() {
        // formatting, parsing the numeric portion back, and reformatting
        // yields the same string at the configured precision
        let fmt = Formatter::new();
        for (value, number_type) in [
            (1234.5678, NumberType::WholeNumber),
            (42.567, NumberType::TokenQuantityStats),
            (0.123456, NumberType::TokenTx),
        ] {
            let first = fmt.format(Some(value), number_type).unwrap();
            let parsed: f64 = first.replace(',', "").parse().unwrap();
            let second = fmt.format(Some(parsed), number_type).unwrap();
            assert_eq!(first, second);
        }
    }
}
