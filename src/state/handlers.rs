//! One transition function per action kind.
//!
//! Each handler takes the current state by reference and returns the next
//! state. Inputs that make no sense in the current state (a second decimal
//! point, evaluating with a missing operand) return an unchanged copy.

use tracing::debug;

use super::CalculatorState;
use super::action::Digit;
use crate::calculator::{self, Operation};

/// Append a digit to the current operand.
pub fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: digit.to_string(),
            ..CalculatorState::default()
        };
    }

    if digit == Digit::ZERO && state.current_operand == "0" {
        debug!("Ignoring redundant leading zero");
        return state.clone();
    }

    if digit.is_point() && state.current_operand.contains('.') {
        debug!("Ignoring second decimal point");
        return state.clone();
    }

    let mut current_operand = state.current_operand.clone();
    current_operand.push(digit.as_char());

    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

/// Choose the pending operator, evaluating any complete pending operation
/// first.
pub fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    if state.current_operand.is_empty() && state.previous_operand.is_empty() {
        debug!("Ignoring operator with no operand");
        return state.clone();
    }

    if state.previous_operand.is_empty() {
        return CalculatorState {
            previous_operand: state.current_operand.clone(),
            current_operand: String::new(),
            operation: Some(operation),
            overwrite: false,
        };
    }

    if state.current_operand.is_empty() {
        // Operator pressed twice: the last one wins.
        return CalculatorState {
            operation: Some(operation),
            overwrite: false,
            ..state.clone()
        };
    }

    CalculatorState {
        previous_operand: pending_result(state),
        current_operand: String::new(),
        operation: Some(operation),
        overwrite: false,
    }
}

/// Remove the last character of the current operand.
pub fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState::default();
    }

    if state.current_operand.is_empty() {
        return state.clone();
    }

    let mut current_operand = state.current_operand.clone();
    current_operand.pop();

    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

/// Evaluate the pending operation and show the result.
pub fn evaluate(state: &CalculatorState) -> CalculatorState {
    if !state.is_complete() {
        debug!("Ignoring evaluate on incomplete expression");
        return state.clone();
    }

    CalculatorState {
        current_operand: pending_result(state),
        previous_operand: String::new(),
        operation: None,
        overwrite: true,
    }
}

/// Result of `previous <operation> current`, or an empty string when no
/// operator is pending.
fn pending_result(state: &CalculatorState) -> String {
    match state.operation {
        Some(operation) => {
            calculator::evaluate(&state.previous_operand, &state.current_operand, operation)
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::new(c).unwrap()
    }

    fn state(previous: &str, current: &str, operation: Option<Operation>) -> CalculatorState {
        CalculatorState {
            previous_operand: previous.to_string(),
            current_operand: current.to_string(),
            operation,
            overwrite: false,
        }
    }

    #[test]
    fn test_add_digit_appends() {
        let next = add_digit(&state("", "12", None), digit('3'));
        assert_eq!(next.current_operand, "123");
    }

    #[test]
    fn test_add_digit_to_empty() {
        let next = add_digit(&CalculatorState::default(), digit('.'));
        assert_eq!(next.current_operand, ".");
    }

    #[test]
    fn test_add_digit_redundant_zero() {
        let before = state("", "0", None);
        assert_eq!(add_digit(&before, digit('0')), before);
    }

    #[test]
    fn test_add_digit_after_zero_keeps_zero() {
        let next = add_digit(&state("", "0", None), digit('5'));
        assert_eq!(next.current_operand, "05");
    }

    #[test]
    fn test_add_digit_second_point_ignored() {
        let before = state("", "1.5", None);
        assert_eq!(add_digit(&before, digit('.')), before);
    }

    #[test]
    fn test_add_digit_overwrite_starts_fresh() {
        let before = CalculatorState {
            current_operand: "8".to_string(),
            overwrite: true,
            ..CalculatorState::default()
        };
        let next = add_digit(&before, digit('4'));
        assert_eq!(next, state("", "4", None));
    }

    #[test]
    fn test_add_digit_overwrite_ignores_zero_rule() {
        let before = CalculatorState {
            current_operand: "0".to_string(),
            overwrite: true,
            ..CalculatorState::default()
        };
        assert_eq!(add_digit(&before, digit('0')).current_operand, "0");
        assert!(!add_digit(&before, digit('0')).overwrite);
    }

    #[test]
    fn test_choose_operation_nothing_to_operate_on() {
        let before = CalculatorState::default();
        assert_eq!(choose_operation(&before, Operation::Add), before);
    }

    #[test]
    fn test_choose_operation_first_operator() {
        let next = choose_operation(&state("", "5", None), Operation::Add);
        assert_eq!(next, state("5", "", Some(Operation::Add)));
    }

    #[test]
    fn test_choose_operation_after_evaluate_clears_overwrite() {
        let before = CalculatorState {
            current_operand: "8".to_string(),
            overwrite: true,
            ..CalculatorState::default()
        };
        let next = choose_operation(&before, Operation::Multiply);
        assert_eq!(next, state("8", "", Some(Operation::Multiply)));
    }

    #[test]
    fn test_choose_operation_replaces_operator() {
        let next = choose_operation(&state("5", "", Some(Operation::Add)), Operation::Subtract);
        assert_eq!(next, state("5", "", Some(Operation::Subtract)));
    }

    #[test]
    fn test_choose_operation_chains() {
        let next = choose_operation(&state("2", "4", Some(Operation::Add)), Operation::Multiply);
        assert_eq!(next, state("6", "", Some(Operation::Multiply)));
    }

    #[test]
    fn test_choose_operation_chain_without_operator() {
        let next = choose_operation(&state("2", "4", None), Operation::Add);
        assert_eq!(next, state("", "", Some(Operation::Add)));
    }

    #[test]
    fn test_delete_digit_empty_is_noop() {
        let before = CalculatorState::default();
        assert_eq!(delete_digit(&before), before);
    }

    #[test]
    fn test_delete_digit_single_char() {
        assert_eq!(delete_digit(&state("", "7", None)).current_operand, "");
    }

    #[test]
    fn test_delete_digit_drops_last() {
        let next = delete_digit(&state("3", "123", Some(Operation::Add)));
        assert_eq!(next, state("3", "12", Some(Operation::Add)));
    }

    #[test]
    fn test_delete_digit_after_evaluate_clears() {
        let before = CalculatorState {
            current_operand: "8".to_string(),
            overwrite: true,
            ..CalculatorState::default()
        };
        assert!(delete_digit(&before).is_clear());
    }

    #[test]
    fn test_evaluate_incomplete_is_noop() {
        for before in [
            state("", "3", Some(Operation::Add)),
            state("5", "", Some(Operation::Add)),
            state("5", "3", None),
        ] {
            assert_eq!(evaluate(&before), before);
        }
    }

    #[test]
    fn test_evaluate_sets_overwrite() {
        let next = evaluate(&state("5", "3", Some(Operation::Add)));
        assert_eq!(
            next,
            CalculatorState {
                current_operand: "8".to_string(),
                previous_operand: String::new(),
                operation: None,
                overwrite: true,
            }
        );
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        let next = evaluate(&state("1", "0", Some(Operation::Divide)));
        assert_eq!(next.current_operand, "Infinity");
        assert!(next.overwrite);
    }
}
