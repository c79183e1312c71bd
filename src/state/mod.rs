//! Calculator state machine.
//!
//! The whole calculator is a pure reducer over [`CalculatorState`]: every
//! [`Action`] produces a new state value and the previous one is discarded.
//! [`Store`] and [`Dispatcher`] host that reducer for callers that need a
//! single owned state slot.

mod action;
mod dispatcher;
mod handlers;
mod reducer;

pub use action::{Action, Digit};
pub use dispatcher::{DispatchHandle, Dispatcher};
pub use reducer::{Store, reduce, reduce_record};

use serde::{Deserialize, Serialize};

use crate::calculator::Operation;

/// Everything the calculator remembers between key presses.
///
/// The default value is both the initial state and the all-clear state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    /// Operand being typed. Digits and at most one `.`, or empty.
    pub current_operand: String,
    /// Left-hand operand, set once an operator has been chosen.
    pub previous_operand: String,
    /// Pending operator.
    pub operation: Option<Operation>,
    /// When set, the next digit starts a new calculation.
    pub overwrite: bool,
}

impl CalculatorState {
    /// True if this is the initial (all-clear) state.
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// True if previous operand, current operand and operator are all set.
    pub fn is_complete(&self) -> bool {
        !self.previous_operand.is_empty()
            && !self.current_operand.is_empty()
            && self.operation.is_some()
    }
}
