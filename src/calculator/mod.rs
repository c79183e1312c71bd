//! Calculator arithmetic and display formatting.
//!
//! This module provides functionality to:
//! - Parse operand strings and print numbers canonically
//! - Evaluate a single binary operation on two operands
//! - Format operands with digit grouping for display

mod evaluation;
mod format;
mod number;

pub use evaluation::{Operation, evaluate, evaluate_symbol};
pub use format::{NumberLocale, format_operand, format_operand_default};
pub use number::{number_to_string, parse_float, parse_number};
