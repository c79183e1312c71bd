//! The two text lines a calculator screen shows for a state.

use std::fmt;

use serde::Serialize;

use crate::calculator::{NumberLocale, format_operand};
use crate::state::CalculatorState;

/// Screen contents derived from a [`CalculatorState`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Formatted previous operand followed by the pending operator, e.g. `1,234 +`.
    pub previous: String,
    /// Formatted current operand.
    pub current: String,
}

impl DisplayLines {
    pub fn from_state(state: &CalculatorState, locale: &NumberLocale) -> Self {
        let previous_operand = format_operand(&state.previous_operand, locale);
        let operation = state.operation.map(|op| op.symbol());

        let previous = match (previous_operand, operation) {
            (Some(operand), Some(symbol)) => format!("{} {}", operand, symbol),
            (Some(operand), None) => operand,
            (None, Some(symbol)) => symbol.to_string(),
            (None, None) => String::new(),
        };

        Self {
            previous,
            current: format_operand(&state.current_operand, locale).unwrap_or_default(),
        }
    }

    /// Both lines empty.
    pub fn is_blank(&self) -> bool {
        self.previous.is_empty() && self.current.is_empty()
    }
}

impl fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}
