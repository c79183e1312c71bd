//! Numeric conversions shared by the evaluator and the formatter.
//!
//! Operands are kept as strings in the calculator state. These helpers turn
//! them into `f64` and back again with web-calculator semantics: parsing reads
//! the longest numeric prefix, and printing produces the shortest string that
//! round-trips, switching to exponent notation for very large or very small
//! magnitudes.

use lazy_static::lazy_static;
use regex::Regex;

/// Largest decimal exponent still printed in positional notation.
const MAX_POSITIONAL_EXPONENT: i32 = 21;

/// Smallest decimal exponent still printed in positional notation.
const MIN_POSITIONAL_EXPONENT: i32 = -6;

lazy_static! {
    /// Matches the numeric prefix of a string: optional sign, then either
    /// `Infinity` or a decimal literal with an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))"
    ).unwrap();

    /// Matches a string that is a number and nothing else.
    static ref NUMERIC_WHOLE: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$"
    ).unwrap();
}

/// Parse the leading numeric prefix of `input`.
///
/// Leading whitespace is skipped and anything after the prefix is ignored, so
/// `"12.5abc"` parses as `12.5`. Returns `NaN` when there is no prefix at all.
pub fn parse_float(input: &str) -> f64 {
    NUMERIC_PREFIX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_literal(m.as_str()))
        .unwrap_or(f64::NAN)
}

/// Convert a whole string to a number.
///
/// Unlike [`parse_float`] the entire (trimmed) string must be numeric. An
/// empty or all-whitespace string converts to `0`.
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if NUMERIC_WHOLE.is_match(trimmed) {
        parse_literal(trimmed)
    } else {
        f64::NAN
    }
}

fn parse_literal(literal: &str) -> f64 {
    // The regexes only admit literals `f64::from_str` understands.
    literal.parse().unwrap_or(f64::NAN)
}

/// Convert a number to its canonical decimal string.
///
/// Uses the shortest digit sequence that round-trips. Magnitudes of `1e21`
/// and above, or below `1e-6`, are printed as `d.ddde±x`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    if value == 0.0 {
        // Also covers -0.
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value);

    format!("{}{}", sign, layout_digits(&digits, exponent + 1))
}

/// Digits of `|value|` rounded to a whole number, without sign or grouping.
///
/// Built from the shortest round-trip digits, so `1e23` gives a one followed
/// by 23 zeros rather than the exact binary expansion. `value` must be finite.
pub(crate) fn whole_digits(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(rounded);
    let width = (exponent + 1).max(digits.len() as i32) as usize;
    format!("{:0<width$}", digits, width = width)
}

/// Shortest round-trip significant digits of `|value|` and the decimal
/// exponent of the first one. `value` must be finite and non-zero.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    (digits, exponent)
}

/// Place the decimal point in `digits`, where `point` is the number of digits
/// before it (it may be negative or exceed the digit count).
fn layout_digits(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;

    if count <= point && point <= MAX_POSITIONAL_EXPONENT {
        return format!("{}{}", digits, "0".repeat((point - count) as usize));
    }

    if 0 < point && point <= MAX_POSITIONAL_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        return format!("{}.{}", int_part, frac_part);
    }

    if MIN_POSITIONAL_EXPONENT < point && point <= 0 {
        return format!("0.{}{}", "0".repeat((-point) as usize), digits);
    }

    let exponent = point - 1;
    let exponent_sign = if exponent < 0 { "-" } else { "+" };
    let (lead, rest) = digits.split_at(1);

    if rest.is_empty() {
        format!("{}e{}{}", lead, exponent_sign, exponent.abs())
    } else {
        format!("{}.{}e{}{}", lead, rest, exponent_sign, exponent.abs())
    }
}
