//! Locale-aware numeric rendering
//!
//! Turns an `f64` plus a [`FormatOptions`] directive into a display string.
//! Rounding works on the shortest decimal representation of the float
//! (half-away-from-zero on the decimal digits), not on binary `format!`
//! precision, so boundary values like `0.005` round the way a reader expects.
//!
//! Three notations are supported:
//! - standard: fraction or significant-digit precision with optional grouping
//! - compact: K/M/B/T suffixes at each power of one thousand
//! - scientific: `mE<exp>` mantissa-exponent form
//!
//! The JS-style helpers [`to_precision`] and [`to_exponential`] reproduce the
//! `toPrecision` / `toExponential` output shapes ("1.23e+6", "3.40e-7") that
//! the ad-hoc dollar formatters rely on.

use crate::locale::Locale;
use crate::options::{FormatOptions, Notation};

/// Compact-notation suffixes, smallest tier first.
const TIERS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Render a finite value with the given options.
///
/// `symbol` is the currency symbol to prefix, or "" for plain numbers. The
/// sign is placed before the symbol ("-$1.23").
pub(crate) fn render(value: f64, options: &FormatOptions, locale: &Locale, symbol: &str) -> String {
    debug_assert!(value.is_finite(), "render requires a finite value");
    match options.notation {
        Notation::Standard => render_standard(value, options, locale, symbol),
        Notation::Compact => render_compact(value, options, locale, symbol),
        Notation::Scientific => render_scientific(value, options, locale, symbol),
    }
}

fn render_standard(value: f64, options: &FormatOptions, locale: &Locale, symbol: &str) -> String {
    let mut dec = Decimal::from_f64(value);
    apply_digit_limits(&mut dec, options);
    let body = assemble(&dec, options, locale, options.grouping);
    finish(&dec, symbol, body)
}

fn render_compact(value: f64, options: &FormatOptions, locale: &Locale, symbol: &str) -> String {
    let abs = value.abs();
    // Largest tier the raw magnitude reaches; None means no suffix.
    let mut tier = TIERS.iter().rposition(|(threshold, _)| abs >= *threshold);
    loop {
        let scaled = match tier {
            Some(i) => abs / TIERS[i].0,
            None => abs,
        };
        let mut dec = Decimal::from_f64(if value < 0.0 { -scaled } else { scaled });
        apply_digit_limits(&mut dec, options);
        // Rounding can push the mantissa to 1000 (999.99 -> "1000.0"); when it
        // does, move up a tier and round again so the suffix stays consistent.
        if dec.exp >= 3 && tier != Some(TIERS.len() - 1) {
            tier = Some(tier.map_or(0, |i| i + 1));
            continue;
        }
        // The mantissa is always below 1000 (T overflows excepted), so
        // grouping never applies inside compact notation.
        let mut body = assemble(&dec, options, locale, false);
        if let Some(i) = tier {
            body.push_str(TIERS[i].1);
        }
        return finish(&dec, symbol, body);
    }
}

fn render_scientific(value: f64, options: &FormatOptions, locale: &Locale, symbol: &str) -> String {
    let mut dec = Decimal::from_f64(value);
    dec.round_significant(options.max_significant_digits.unwrap_or(17) as usize);
    let min_sig = options.min_significant_digits.unwrap_or(1) as usize;

    let mut mantissa = String::new();
    mantissa.push((b'0' + dec.digits[0]) as char);
    let mut fraction: String = dec.digits[1..].iter().map(|d| (b'0' + d) as char).collect();
    while fraction.len() + 1 < min_sig {
        fraction.push('0');
    }
    if !fraction.is_empty() {
        mantissa.push(locale.decimal_separator);
        mantissa.push_str(&fraction);
    }
    // Intl scientific style: uppercase E, no plus sign on the exponent.
    let body = format!("{}E{}", mantissa, dec.exp);
    finish(&dec, symbol, body)
}

/// Round the decimal per the option's digit limits. Significant digits win
/// over fraction digits when set.
fn apply_digit_limits(dec: &mut Decimal, options: &FormatOptions) {
    if options.uses_significant_digits() {
        dec.round_significant(options.max_significant_digits.unwrap_or(17) as usize);
    } else {
        dec.round_fraction(options.max_fraction_digits as usize);
    }
}

/// Build the unsigned digit body: integer part, separators, padded fraction.
fn assemble(dec: &Decimal, options: &FormatOptions, locale: &Locale, grouping: bool) -> String {
    let (int_part, mut fraction) = dec.to_parts();

    let pad = if options.uses_significant_digits() {
        let min_sig = options.min_significant_digits.unwrap_or(1) as usize;
        min_sig.saturating_sub(dec.significant_count())
    } else {
        (options.min_fraction_digits as usize).saturating_sub(fraction.len())
    };
    for _ in 0..pad {
        fraction.push('0');
    }

    let int_part = if grouping {
        group(&int_part, locale.grouping_separator)
    } else {
        int_part
    };

    if fraction.is_empty() {
        int_part
    } else {
        format!("{}{}{}", int_part, locale.decimal_separator, fraction)
    }
}

/// Prefix sign and currency symbol. The sign is dropped when rounding
/// produced zero so "-0.00" never appears.
fn finish(dec: &Decimal, symbol: &str, body: String) -> String {
    let sign = if dec.negative && !dec.is_zero() { "-" } else { "" };
    format!("{}{}{}", sign, symbol, body)
}

/// Insert `sep` every three digits from the right.
fn group(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Round to `digits` significant digits, returning the nearest `f64`.
pub(crate) fn round_to_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mut dec = Decimal::from_f64(value);
    dec.round_significant(digits);
    dec.to_f64()
}

/// Round to `digits` fraction digits, returning the nearest `f64`.
pub(crate) fn round_to_fraction(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mut dec = Decimal::from_f64(value);
    dec.round_fraction(digits);
    dec.to_f64()
}

/// JS `Number.prototype.toPrecision` shape: fixed decimal padded to exactly
/// `precision` significant digits, switching to "d.dde+X" exponential form for
/// magnitudes at or above `10^precision` or below `1e-6`.
pub(crate) fn to_precision(value: f64, precision: usize) -> String {
    let mut dec = Decimal::from_f64(value);
    dec.round_significant(precision);
    let sign = if dec.negative && !dec.is_zero() { "-" } else { "" };

    if !dec.is_zero() && (dec.exp >= precision as i32 || dec.exp < -6) {
        let mut fraction: String = dec.digits[1..].iter().map(|d| (b'0' + d) as char).collect();
        while fraction.len() + 1 < precision {
            fraction.push('0');
        }
        let mantissa = if fraction.is_empty() {
            format!("{}", dec.digits[0])
        } else {
            format!("{}.{}", dec.digits[0], fraction)
        };
        return format!("{}{}e{:+}", sign, mantissa, dec.exp);
    }

    let (int_part, mut fraction) = dec.to_parts();
    let pad = precision.saturating_sub(dec.significant_count());
    for _ in 0..pad {
        fraction.push('0');
    }
    if fraction.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, fraction)
    }
}

/// JS `Number.prototype.toExponential` shape: one integer digit, exactly
/// `fraction_digits` fraction digits, and a signed exponent ("3.40e-7").
pub(crate) fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let mut dec = Decimal::from_f64(value);
    dec.round_significant(fraction_digits + 1);
    let sign = if dec.negative && !dec.is_zero() { "-" } else { "" };

    let mut fraction: String = dec.digits[1..].iter().map(|d| (b'0' + d) as char).collect();
    while fraction.len() < fraction_digits {
        fraction.push('0');
    }
    if fraction.is_empty() {
        format!("{}{}e{:+}", sign, dec.digits[0], dec.exp)
    } else {
        format!("{}{}.{}e{:+}", sign, dec.digits[0], fraction, dec.exp)
    }
}

/// Decimal form of a finite `f64`: `d0.d1d2... * 10^exp` with the digit
/// vector holding the shortest round-trip representation.
///
/// Invariant: `digits` is never empty, the leading digit is non-zero unless
/// the value is zero (`digits == [0]`), and there are no trailing zeros.
#[derive(Debug, Clone, PartialEq)]
struct Decimal {
    negative: bool,
    digits: Vec<u8>,
    exp: i32,
}

impl Decimal {
    fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite());
        let negative = value.is_sign_negative();
        // "{:e}" produces the shortest mantissa that round-trips, e.g. "2.5e6"
        let formatted = format!("{:e}", value.abs());
        let (mantissa, exp_part) = formatted
            .split_once('e')
            .unwrap_or((formatted.as_str(), "0"));
        let exp: i32 = exp_part.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .collect();
        let mut dec = Decimal {
            negative,
            digits,
            exp,
        };
        dec.trim();
        if dec.is_zero() {
            dec.set_zero();
        }
        dec
    }

    fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    fn set_zero(&mut self) {
        self.digits = vec![0];
        self.exp = 0;
    }

    fn trim(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// Keep the leading `keep` digits, rounding half-away-from-zero on the
    /// first dropped digit. `keep <= 0` rounds relative to the leading digit:
    /// the value collapses to zero or carries up to the next power of ten.
    fn round_at(&mut self, keep: i64) {
        if self.is_zero() || keep >= self.digits.len() as i64 {
            return;
        }
        if keep < 0 {
            self.set_zero();
            return;
        }
        let keep = keep as usize;
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut i = self.digits.len() as isize - 1;
            loop {
                if i < 0 {
                    self.digits.insert(0, 1);
                    self.exp += 1;
                    break;
                }
                let d = &mut self.digits[i as usize];
                if *d == 9 {
                    *d = 0;
                    i -= 1;
                } else {
                    *d += 1;
                    break;
                }
            }
        }
        self.trim();
        if self.digits.is_empty() || self.digits == [0] {
            self.set_zero();
        }
    }

    fn round_significant(&mut self, digits: usize) {
        self.round_at(digits as i64);
    }

    fn round_fraction(&mut self, digits: usize) {
        self.round_at(self.exp as i64 + 1 + digits as i64);
    }

    /// Digit positions that count as significant for min-digit padding:
    /// integer positions down to the ones place all count, so 1000 already
    /// has four and needs no fraction padding.
    fn significant_count(&self) -> usize {
        if self.is_zero() {
            1
        } else if self.exp >= 0 {
            self.digits.len().max(self.exp as usize + 1)
        } else {
            self.digits.len()
        }
    }

    /// Unsigned integer and fraction digit strings, unpadded.
    fn to_parts(&self) -> (String, String) {
        if self.is_zero() {
            return ("0".to_string(), String::new());
        }
        if self.exp >= 0 {
            let int_len = self.exp as usize + 1;
            let mut int_part: String = self
                .digits
                .iter()
                .take(int_len)
                .map(|d| (b'0' + d) as char)
                .collect();
            while int_part.len() < int_len {
                int_part.push('0');
            }
            let fraction: String = self
                .digits
                .iter()
                .skip(int_len)
                .map(|d| (b'0' + d) as char)
                .collect();
            (int_part, fraction)
        } else {
            let mut fraction = "0".repeat((-self.exp - 1) as usize);
            fraction.extend(self.digits.iter().map(|d| (b'0' + d) as char));
            ("0".to_string(), fraction)
        }
    }

    fn to_f64(&self) -> f64 {
        let (int_part, fraction) = self.to_parts();
        let sign = if self.negative { "-" } else { "" };
        let plain = if fraction.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, fraction)
        };
        plain.parse().unwrap_or(0.0)
    }
}
