//! Action routing and the owned single-writer store.

use tracing::trace;

use super::handlers;
use super::{Action, CalculatorState};
use crate::calculator::NumberLocale;
use crate::display::DisplayLines;
use crate::error::ActionError;

/// Compute the state that follows `state` after `action`.
pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    let next = match *action {
        Action::AddDigit { digit } => handlers::add_digit(state, digit),
        Action::ChooseOperation { operation } => handlers::choose_operation(state, operation),
        Action::AllClear => CalculatorState::default(),
        Action::DeleteDigit => handlers::delete_digit(state),
        Action::Evaluate => handlers::evaluate(state),
    };

    trace!(
        kind = action.kind(),
        previous = %next.previous_operand,
        current = %next.current_operand,
        operation = ?next.operation,
        overwrite = next.overwrite,
        "Reduced action"
    );

    next
}

/// Reduce a JSON action record.
///
/// Records of unknown type leave the state unchanged.
pub fn reduce_record(state: &CalculatorState, record: &str) -> Result<CalculatorState, ActionError> {
    Ok(match Action::from_record(record)? {
        Some(action) => reduce(state, &action),
        None => state.clone(),
    })
}

/// Owns a calculator state and replaces it on every dispatched action.
#[derive(Clone, Debug, Default)]
pub struct Store {
    state: CalculatorState,
    dispatched: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state instead of the all-clear state.
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Number of actions applied so far, including ones that were no-ops.
    pub fn history_len(&self) -> usize {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: &Action) -> &CalculatorState {
        self.state = reduce(&self.state, action);
        self.dispatched += 1;
        &self.state
    }

    /// Dispatch every action in order.
    pub fn dispatch_all<'a>(
        &mut self,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> &CalculatorState {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Parse and dispatch a JSON action record. Unknown record types are
    /// counted but leave the state unchanged.
    pub fn dispatch_record(&mut self, record: &str) -> Result<&CalculatorState, ActionError> {
        self.state = reduce_record(&self.state, record)?;
        self.dispatched += 1;
        Ok(&self.state)
    }

    /// Display lines for the current state.
    pub fn display(&self, locale: &NumberLocale) -> DisplayLines {
        DisplayLines::from_state(&self.state, locale)
    }
}
