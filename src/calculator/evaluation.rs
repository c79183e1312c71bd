//! Binary operator evaluation.
//!
//! Applies one of the four keypad operators to two operand strings and
//! returns the result in canonical string form. Nothing here fails: malformed
//! operands parse to `NaN`, division by zero yields `Infinity`, and an unknown
//! operator symbol yields an empty string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::number::{number_to_string, parse_float};
use crate::error::ActionError;

/// One of the four keypad operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operators, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// Look up an operator by its display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown on the keypad and in the display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two numbers.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ActionError::UnknownOperator(s.to_string()))
    }
}

/// Evaluate `previous <operation> current`.
///
/// Both operands are read with [`parse_float`], so only their numeric prefix
/// matters. The result is returned as a canonical number string, which may be
/// `"NaN"`, `"Infinity"` or `"-Infinity"`.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let lhs = parse_float(previous);
    let rhs = parse_float(current);
    number_to_string(operation.apply(lhs, rhs))
}

/// Evaluate with a raw operator symbol.
///
/// Returns an empty string if `symbol` is not one of `+ - * ÷`.
pub fn evaluate_symbol(previous: &str, current: &str, symbol: &str) -> String {
    match Operation::from_symbol(symbol) {
        Some(operation) => evaluate(previous, current, operation),
        None => String::new(),
    }
}
