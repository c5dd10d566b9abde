//! Number types and their magnitude-bucketed rule tables
//!
//! Every display context gets a [`NumberType`] tag, and every tag maps to an
//! ordered list of [`FormatterRule`]s. Selection walks the list and the first
//! match wins, so exact-zero rules come first and every list ends with an
//! `UpperBound(Infinity)` catch-all that accepts any remaining finite value.
//!
//! The tables are `static` and never mutated; [`validate_all_tables`] checks
//! their shape once so a failed match at call time can only mean a bug in a
//! caller-supplied list.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::*;

/// Semantic tag naming what a numeric value represents, and therefore which
/// precision and notation conventions apply to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberType {
    /// Token quantities in non-transaction contexts (e.g. portfolio balances)
    #[default]
    TokenNonTx,
    /// Token quantity stats where shorthand is okay (e.g. pool stats balances)
    TokenQuantityStats,
    /// Token quantities in transaction contexts (e.g. swap, send)
    TokenTx,
    /// Swap price conversions shown below the input/output amounts
    SwapPrice,
    /// Swap trade output amount in the text input boxes
    SwapTradeAmount,
    /// Amounts in the swap details dropdown
    SwapDetailsAmount,
    /// Fiat values for price, volume, or TVL in a chart header or scale
    ChartFiatValue,
    /// Fiat values for volume bar chart scales (y axis ticks)
    ChartVolumePriceScale,
    /// Fiat prices in the token details flow (except token stats)
    FiatTokenDetails,
    /// Fiat prices everywhere outside the token details flow
    FiatTokenPrice,
    /// Fiat market cap, TVL, and volume on the token details screen
    FiatTokenStats,
    /// Fiat price of token balances
    FiatTokenQuantity,
    /// Fiat gas prices
    FiatGasPrice,
    /// Portfolio balance
    PortfolioBalance,
    /// NFT floor price denominated in a token (e.g. ETH)
    NftTokenFloorPrice,
    /// NFT collection stats like number of items, holders, and sales
    NftCollectionStats,
    /// NFT floor price with trailing zeros
    NftTokenFloorPriceTrailingZeros,
    /// NFT token price denominated in a token
    NftToken,
    /// NFT token price in local fiat currency
    FiatNftToken,
    /// Whole number formatting
    WholeNumber,
}

/// Condition deciding whether a rule applies to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleMatch {
    /// Applies when the comparison value equals this exactly
    Exact(f64),
    /// Applies when the comparison value is strictly below this bound
    UpperBound(f64),
}

/// Override replacing the caller's value in the rendered output.
///
/// Boundary buckets display a fixed literal ("<0.001", ">999T") or bypass
/// rendering entirely ("-" for missing stats), so the override is a variant
/// type rather than a pair of optional fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HardCoded {
    /// Render the caller's value normally
    None,
    /// Render this fixed value with the rule's options, prefixed
    Input { value: f64, prefix: &'static str },
    /// Emit this string verbatim, ignoring the caller's value
    Output(&'static str),
}

/// One magnitude bucket in a number type's rule list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatterRule {
    pub matches: RuleMatch,
    pub options: FormatOptions,
    pub hard_coded: HardCoded,
}

impl FormatterRule {
    pub const fn exact(value: f64, options: FormatOptions) -> Self {
        FormatterRule {
            matches: RuleMatch::Exact(value),
            options,
            hard_coded: HardCoded::None,
        }
    }

    pub const fn exact_output(value: f64, options: FormatOptions, output: &'static str) -> Self {
        FormatterRule {
            matches: RuleMatch::Exact(value),
            options,
            hard_coded: HardCoded::Output(output),
        }
    }

    pub const fn below(bound: f64, options: FormatOptions) -> Self {
        FormatterRule {
            matches: RuleMatch::UpperBound(bound),
            options,
            hard_coded: HardCoded::None,
        }
    }

    /// Bucket that renders a fixed boundary literal, e.g. `<0.001`.
    pub const fn below_capped(
        bound: f64,
        options: FormatOptions,
        literal: f64,
        prefix: &'static str,
    ) -> Self {
        FormatterRule {
            matches: RuleMatch::UpperBound(bound),
            options,
            hard_coded: HardCoded::Input {
                value: literal,
                prefix,
            },
        }
    }

    pub const fn catch_all(options: FormatOptions) -> Self {
        FormatterRule::below(f64::INFINITY, options)
    }

    /// Catch-all that caps the display at a fixed literal, e.g. `>999T`.
    pub const fn catch_all_capped(
        options: FormatOptions,
        literal: f64,
        prefix: &'static str,
    ) -> Self {
        FormatterRule::below_capped(f64::INFINITY, options, literal, prefix)
    }
}

/// Display cap for token-denominated amounts: anything above 1e15 shows ">999T".
const TOKEN_AMOUNT_CAP: f64 = 999_000_000_000_000.0;

static TOKEN_NON_TX: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below_capped(0.001, THREE_DECIMALS, 0.001, "<"),
    FormatterRule::below(1.0, THREE_DECIMALS),
    FormatterRule::below(1e6, TWO_DECIMALS),
    FormatterRule::below(1e15, SHORTHAND_TWO_DECIMALS),
    FormatterRule::catch_all_capped(SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS, TOKEN_AMOUNT_CAP, ">"),
];

static TOKEN_QUANTITY_STATS: &[FormatterRule] = &[
    // a zero stat usually means the data is missing, so show the placeholder
    FormatterRule::exact_output(0.0, NO_DECIMALS, "-"),
    FormatterRule::below_capped(0.01, TWO_DECIMALS, 0.01, "<"),
    FormatterRule::below(1000.0, TWO_DECIMALS),
    FormatterRule::catch_all(SHORTHAND_ONE_DECIMAL),
];

static TOKEN_TX: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below_capped(0.00001, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN, 0.00001, "<"),
    FormatterRule::below(1.0, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN),
    FormatterRule::below(10000.0, SIX_SIG_FIGS_TWO_DECIMALS),
    FormatterRule::catch_all(TWO_DECIMALS),
];

static SWAP_TRADE_AMOUNT: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below(0.1, SIX_SIG_FIGS_NO_COMMAS),
    FormatterRule::below(1.0, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN_NO_COMMAS),
    FormatterRule::catch_all(SIX_SIG_FIGS_TWO_DECIMALS_NO_COMMAS),
];

static SWAP_DETAILS_AMOUNT: &[FormatterRule] = &[FormatterRule::catch_all(SIX_SIG_FIGS_NO_COMMAS)];

static SWAP_PRICE: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below_capped(0.00001, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN, 0.00001, "<"),
    FormatterRule::below(0.1, SIX_SIG_FIGS_NO_COMMAS),
    FormatterRule::below(1.0, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN_NO_COMMAS),
    FormatterRule::catch_all(SIX_SIG_FIGS_TWO_DECIMALS_NO_COMMAS),
];

static FIAT_TOKEN_DETAILS: &[FormatterRule] = &[
    FormatterRule::exact(0.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::below_capped(0.00000001, ONE_SIG_FIG_CURRENCY, 0.00000001, "<"),
    FormatterRule::below(0.1, THREE_SIG_FIGS_CURRENCY),
    FormatterRule::below(1.05, THREE_DECIMALS_CURRENCY),
    FormatterRule::below(1e6, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_TWO_DECIMALS),
];

static CHART_FIAT_VALUE: &[FormatterRule] = &[
    // a zero stat usually means the data is missing, so show the placeholder
    FormatterRule::exact_output(0.0, ONE_SIG_FIG_CURRENCY, "-"),
    FormatterRule::below(1.05, EIGHT_DECIMALS_CURRENCY),
    FormatterRule::below(1e6, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_TWO_DECIMALS),
];

static CHART_VOLUME_PRICE_SCALE: &[FormatterRule] = &[
    FormatterRule::below_capped(0.001, ONE_SIG_FIG_CURRENCY, 0.001, "<"),
    FormatterRule::below(2.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::below(1000.0, NO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_ONE_DECIMAL),
];

static FIAT_TOKEN_PRICE: &[FormatterRule] = &[
    FormatterRule::exact(0.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::below_capped(0.00000001, ONE_SIG_FIG_CURRENCY, 0.00000001, "<"),
    FormatterRule::below(1.0, THREE_SIG_FIGS_CURRENCY),
    FormatterRule::below(1e6, TWO_DECIMALS_CURRENCY),
    FormatterRule::below(1e16, SHORTHAND_CURRENCY_TWO_DECIMALS),
    FormatterRule::catch_all(SEVEN_SIG_FIGS_SCI_NOTATION_CURRENCY),
];

static FIAT_TOKEN_STATS: &[FormatterRule] = &[
    // a zero stat usually means the data is missing, so show the placeholder
    FormatterRule::exact_output(0.0, ONE_SIG_FIG_CURRENCY, "-"),
    FormatterRule::below_capped(0.01, TWO_DECIMALS_CURRENCY, 0.01, "<"),
    FormatterRule::below(1000.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_ONE_DECIMAL),
];

static FIAT_GAS_PRICE: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS_CURRENCY),
    FormatterRule::below_capped(0.01, TWO_DECIMALS_CURRENCY, 0.01, "<"),
    FormatterRule::below(1e6, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_TWO_DECIMALS),
];

static FIAT_TOKEN_QUANTITY: &[FormatterRule] = &[
    FormatterRule::exact(0.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::below_capped(0.01, TWO_DECIMALS_CURRENCY, 0.01, "<"),
    FormatterRule::below(1e6, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(SHORTHAND_CURRENCY_TWO_DECIMALS),
];

static PORTFOLIO_BALANCE: &[FormatterRule] = &[
    FormatterRule::exact(0.0, TWO_DECIMALS_CURRENCY),
    FormatterRule::catch_all(TWO_DECIMALS_CURRENCY),
];

static NFT_TOKEN_FLOOR_PRICE_TRAILING_ZEROS: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below_capped(0.001, THREE_DECIMALS, 0.001, "<"),
    FormatterRule::below(1.0, THREE_DECIMALS),
    FormatterRule::below(1000.0, TWO_DECIMALS),
    FormatterRule::below(1e15, SHORTHAND_TWO_DECIMALS),
    FormatterRule::catch_all_capped(SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS, TOKEN_AMOUNT_CAP, ">"),
];

static NFT_TOKEN_FLOOR_PRICE: &[FormatterRule] = &[
    FormatterRule::exact(0.0, NO_DECIMALS),
    FormatterRule::below_capped(0.001, THREE_DECIMALS, 0.001, "<"),
    FormatterRule::below(1.0, THREE_DECIMALS_NO_TRAILING_ZEROS),
    FormatterRule::below(1000.0, TWO_DECIMALS_NO_TRAILING_ZEROS),
    FormatterRule::below(1e15, SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS),
    FormatterRule::catch_all_capped(SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS, TOKEN_AMOUNT_CAP, ">"),
];

static NFT_COLLECTION_STATS: &[FormatterRule] = &[
    FormatterRule::below(1000.0, NO_DECIMALS),
    FormatterRule::catch_all(SHORTHAND_ONE_DECIMAL),
];

static NFT_TOKEN: &[FormatterRule] = &[
    FormatterRule::exact_output(0.0, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN, "-"),
    FormatterRule::below_capped(0.0001, FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN, 0.0001, "<"),
    FormatterRule::below(1.0, THREE_DECIMALS),
    FormatterRule::below(1000.0, TWO_DECIMALS_NO_TRAILING_ZEROS),
    FormatterRule::below(1e15, SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS),
    FormatterRule::catch_all_capped(SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS, TOKEN_AMOUNT_CAP, ">"),
];

static FIAT_NFT_TOKEN: &[FormatterRule] = &[
    FormatterRule::exact_output(0.0, NO_DECIMALS, "-"),
    FormatterRule::below_capped(0.0001, ONE_SIG_FIG_CURRENCY, 0.0001, "<"),
    FormatterRule::below(1.0, THREE_DECIMALS_NO_TRAILING_ZEROS_CURRENCY),
    FormatterRule::below(1000.0, TWO_DECIMALS_NO_TRAILING_ZEROS_CURRENCY),
    FormatterRule::below(1e15, SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS_CURRENCY),
    FormatterRule::catch_all_capped(
        SHORTHAND_TWO_DECIMALS_NO_TRAILING_ZEROS_CURRENCY,
        TOKEN_AMOUNT_CAP,
        ">",
    ),
];

static WHOLE_NUMBER: &[FormatterRule] = &[FormatterRule::catch_all(NO_DECIMALS)];

impl NumberType {
    /// Every number type, for table validation and tests.
    pub const ALL: [NumberType; 20] = [
        NumberType::TokenNonTx,
        NumberType::TokenQuantityStats,
        NumberType::TokenTx,
        NumberType::SwapPrice,
        NumberType::SwapTradeAmount,
        NumberType::SwapDetailsAmount,
        NumberType::ChartFiatValue,
        NumberType::ChartVolumePriceScale,
        NumberType::FiatTokenDetails,
        NumberType::FiatTokenPrice,
        NumberType::FiatTokenStats,
        NumberType::FiatTokenQuantity,
        NumberType::FiatGasPrice,
        NumberType::PortfolioBalance,
        NumberType::NftTokenFloorPrice,
        NumberType::NftCollectionStats,
        NumberType::NftTokenFloorPriceTrailingZeros,
        NumberType::NftToken,
        NumberType::FiatNftToken,
        NumberType::WholeNumber,
    ];

    /// The ordered rule list for this number type.
    pub fn rules(self) -> &'static [FormatterRule] {
        match self {
            NumberType::TokenNonTx => TOKEN_NON_TX,
            NumberType::TokenQuantityStats => TOKEN_QUANTITY_STATS,
            NumberType::TokenTx => TOKEN_TX,
            NumberType::SwapPrice => SWAP_PRICE,
            NumberType::SwapTradeAmount => SWAP_TRADE_AMOUNT,
            NumberType::SwapDetailsAmount => SWAP_DETAILS_AMOUNT,
            NumberType::ChartFiatValue => CHART_FIAT_VALUE,
            NumberType::ChartVolumePriceScale => CHART_VOLUME_PRICE_SCALE,
            NumberType::FiatTokenDetails => FIAT_TOKEN_DETAILS,
            NumberType::FiatTokenPrice => FIAT_TOKEN_PRICE,
            NumberType::FiatTokenStats => FIAT_TOKEN_STATS,
            NumberType::FiatTokenQuantity => FIAT_TOKEN_QUANTITY,
            NumberType::FiatGasPrice => FIAT_GAS_PRICE,
            NumberType::PortfolioBalance => PORTFOLIO_BALANCE,
            NumberType::NftTokenFloorPrice => NFT_TOKEN_FLOOR_PRICE,
            NumberType::NftCollectionStats => NFT_COLLECTION_STATS,
            NumberType::NftTokenFloorPriceTrailingZeros => NFT_TOKEN_FLOOR_PRICE_TRAILING_ZEROS,
            NumberType::NftToken => NFT_TOKEN,
            NumberType::FiatNftToken => FIAT_NFT_TOKEN,
            NumberType::WholeNumber => WHOLE_NUMBER,
        }
    }
}

/// Pick the first rule matching `input`.
///
/// Currency-styled rules compare against `input * conversion_rate` when a
/// rate is supplied; other rules always compare against the raw input. An
/// `Exact` rule matches on equality, an `UpperBound` rule on a strict `<`.
pub fn select_rule<'a>(
    input: f64,
    rules: &'a [FormatterRule],
    conversion_rate: Option<f64>,
) -> Result<&'a FormatterRule, ConfigError> {
    for rule in rules {
        let compared = match conversion_rate {
            Some(rate) if rule.options.currency => input * rate,
            _ => input,
        };
        let matched = match rule.matches {
            RuleMatch::Exact(exact) => compared == exact,
            RuleMatch::UpperBound(bound) => compared < bound,
        };
        if matched {
            return Ok(rule);
        }
    }
    Err(ConfigError::NoMatchingRule { value: input })
}

/// Check the shape of a rule list: non-empty, terminated by an `Infinity`
/// catch-all, upper bounds strictly increasing, and no exact rule shadowed by
/// an earlier bound.
pub fn validate_rules(rules: &[FormatterRule]) -> Result<(), ConfigError> {
    let last = match rules.last() {
        Some(rule) => rule,
        None => return Err(ConfigError::EmptyRuleList),
    };
    match last.matches {
        RuleMatch::UpperBound(bound) if bound == f64::INFINITY => {}
        RuleMatch::UpperBound(bound) => return Err(ConfigError::MissingCatchAll { last: bound }),
        RuleMatch::Exact(exact) => return Err(ConfigError::MissingCatchAll { last: exact }),
    }

    let mut prev_bound: Option<f64> = None;
    for rule in rules {
        match rule.matches {
            RuleMatch::Exact(exact) => {
                if let Some(bound) = prev_bound {
                    if exact < bound {
                        return Err(ConfigError::ShadowedExactRule { exact, bound });
                    }
                }
            }
            RuleMatch::UpperBound(bound) => {
                if let Some(prev) = prev_bound {
                    if bound <= prev {
                        return Err(ConfigError::NonIncreasingBounds {
                            prev,
                            next: bound,
                        });
                    }
                }
                prev_bound = Some(bound);
            }
        }
    }
    Ok(())
}

/// Validate every shipped table. Cheap enough to run at startup; the shipped
/// tables are also covered by tests, so a failure here means local edits.
pub fn validate_all_tables() -> Result<(), ConfigError> {
    for number_type in NumberType::ALL {
        validate_rules(number_type.rules())?;
        tracing::debug!(?number_type, "rule table validated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shipped_tables_are_well_formed() {
        for number_type in NumberType::ALL {
            assert_eq!(
                validate_rules(number_type.rules()),
                Ok(()),
                "table for {:?} failed validation",
                number_type
            );
        }
    }

    #[test]
    fn test_first_match_wins() {
        let rules = NumberType::TokenNonTx.rules();
        // exact zero is picked over the small-bound bucket
        let rule = select_rule(0.0, rules, None).unwrap();
        assert_eq!(rule.matches, RuleMatch::Exact(0.0));
        // small values land in the capped bucket
        let rule = select_rule(0.0004, rules, None).unwrap();
        assert_eq!(rule.matches, RuleMatch::UpperBound(0.001));
    }

    #[test]
    fn test_upper_bound_is_strict() {
        let rules = NumberType::TokenNonTx.rules();
        let below = select_rule(0.999999, rules, None).unwrap();
        assert_eq!(below.matches, RuleMatch::UpperBound(1.0));
        let at = select_rule(1.0, rules, None).unwrap();
        assert_eq!(at.matches, RuleMatch::UpperBound(1e6));
    }

    #[test]
    fn test_conversion_rate_only_applies_to_currency_rules() {
        // token tables ignore the rate entirely
        let rules = NumberType::TokenNonTx.rules();
        let with_rate = select_rule(0.5, rules, Some(1000.0)).unwrap();
        let without = select_rule(0.5, rules, None).unwrap();
        assert_eq!(with_rate.matches, without.matches);

        // fiat tables compare the converted value
        let rules = NumberType::FiatTokenPrice.rules();
        let rule = select_rule(0.5, rules, Some(1000.0)).unwrap();
        assert_eq!(rule.matches, RuleMatch::UpperBound(1e6));
    }

    #[test]
    fn test_unmatched_value_is_a_config_error() {
        let truncated = &NumberType::TokenNonTx.rules()[..2];
        let err = select_rule(5.0, truncated, None).unwrap_err();
        assert_eq!(err, ConfigError::NoMatchingRule { value: 5.0 });
    }

    #[test]
    fn test_validate_rejects_missing_catch_all() {
        let rules = &[
            FormatterRule::exact(0.0, NO_DECIMALS),
            FormatterRule::below(1000.0, TWO_DECIMALS),
        ];
        assert_eq!(
            validate_rules(rules),
            Err(ConfigError::MissingCatchAll { last: 1000.0 })
        );
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        assert_eq!(validate_rules(&[]), Err(ConfigError::EmptyRuleList));
    }

    #[test]
    fn test_validate_rejects_shadowed_exact_rule() {
        let rules = &[
            FormatterRule::below(0.01, TWO_DECIMALS),
            FormatterRule::exact(0.0, NO_DECIMALS),
            FormatterRule::catch_all(TWO_DECIMALS),
        ];
        assert_eq!(
            validate_rules(rules),
            Err(ConfigError::ShadowedExactRule {
                exact: 0.0,
                bound: 0.01
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_increasing_bounds() {
        let rules = &[
            FormatterRule::below(1000.0, TWO_DECIMALS),
            FormatterRule::below(10.0, TWO_DECIMALS),
            FormatterRule::catch_all(TWO_DECIMALS),
        ];
        assert_eq!(
            validate_rules(rules),
            Err(ConfigError::NonIncreasingBounds {
                prev: 1000.0,
                next: 10.0
            })
        );
    }

    #[test]
    fn test_number_type_wire_tags() {
        let json = serde_json::to_string(&NumberType::TokenNonTx).unwrap();
        assert_eq!(json, "\"token-non-tx\"");
        let json = serde_json::to_string(&NumberType::NftTokenFloorPriceTrailingZeros).unwrap();
        assert_eq!(json, "\"nft-token-floor-price-trailing-zeros\"");
        let back: NumberType = serde_json::from_str("\"fiat-gas-price\"").unwrap();
        assert_eq!(back, NumberType::FiatGasPrice);
    }
}
