//! Operand formatting for display.
//!
//! The integer part of an operand is grouped with thousand separators. Plain
//! digit strings are grouped as typed, however long; other forms (exponents,
//! `Infinity`) are converted and rounded to a whole number first. Whatever follows the first `.` is reattached
//! verbatim, so partially typed input like `"12."` or `"0.500"` is shown as
//! typed.

use serde::{Deserialize, Serialize};

use super::number::{parse_number, whole_digits};

/// Digit grouping and symbol convention used by the formatter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Inserted between digit groups of the integer part.
    pub group_separator: String,
    /// Placed between the integer part and the decimal part.
    pub decimal_separator: String,
    /// Digits per group. Zero disables grouping.
    pub group_size: usize,
    /// Shown for an infinite integer part.
    pub infinity: String,
    /// Shown for an integer part that is not a number.
    pub nan: String,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            group_size: 3,
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
        }
    }
}

/// Format an operand for display.
///
/// Returns `None` for an empty operand, meaning there is nothing to show.
pub fn format_operand(operand: &str, locale: &NumberLocale) -> Option<String> {
    if operand.is_empty() {
        return None;
    }

    let (integer_part, decimal_part) = match operand.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (operand, None),
    };

    let integer = format_integer(integer_part, locale);

    Some(match decimal_part {
        Some(dec_part) => format!("{}{}{}", integer, locale.decimal_separator, dec_part),
        None => integer,
    })
}

/// [`format_operand`] with the default (`1,234.5`) convention.
pub fn format_operand_default(operand: &str) -> Option<String> {
    format_operand(operand, &NumberLocale::default())
}

/// Format the integer part: convert, round to zero fraction digits, group.
fn format_integer(integer_part: &str, locale: &NumberLocale) -> String {
    if let Some((sign, digits)) = split_plain_integer(integer_part) {
        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        return format!(
            "{}{}",
            sign,
            group_digits(digits, &locale.group_separator, locale.group_size)
        );
    }

    let value = parse_number(integer_part);

    if value.is_nan() {
        return locale.nan.clone();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}{}", sign, locale.infinity);
    }

    let digits = whole_digits(value);
    format!(
        "{}{}",
        sign,
        group_digits(&digits, &locale.group_separator, locale.group_size)
    )
}

/// Split `[+-]?[0-9]*` into its display sign and digits.
///
/// A sign with no digits is not a number and returns `None`.
fn split_plain_integer(integer_part: &str) -> Option<(&'static str, &str)> {
    let (sign, digits) = match integer_part.as_bytes().first() {
        Some(b'-') => ("-", &integer_part[1..]),
        Some(b'+') => ("", &integer_part[1..]),
        _ => ("", integer_part),
    };

    let signed = digits.len() != integer_part.len();
    if signed && digits.is_empty() {
        return None;
    }

    digits
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some((sign, digits))
}

/// Insert `separator` between every `size` digits, counting from the right.
fn group_digits(digits: &str, separator: &str, size: usize) -> String {
    if size == 0 || separator.is_empty() {
        return digits.to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % size == 0 {
            groups.push(current.chars().rev().collect());
            current.clear();
        }
        current.push(c);
    }
    groups.push(current.chars().rev().collect());

    groups.reverse();
    groups.join(separator)
}
