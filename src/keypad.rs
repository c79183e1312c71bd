//! Keypad keys and their mapping to actions.
//!
//! Keys are identified by the label printed on them: `0`-`9`, `.`, the four
//! operators, `=`, `AC` and `DEL`. `/` is accepted as a typing alias for `÷`.

use std::fmt;
use std::str::FromStr;

use crate::calculator::Operation;
use crate::error::ActionError;
use crate::state::{Action, Digit};

/// A key on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Operation(Operation),
    Equals,
    AllClear,
    Delete,
}

impl Key {
    /// Keypad rows, top to bottom.
    pub fn layout() -> Vec<Vec<Key>> {
        let digits = |chars: &str| -> Vec<Key> {
            chars
                .chars()
                .filter_map(Digit::new)
                .map(Key::Digit)
                .collect()
        };

        let mut rows = vec![vec![
            Key::AllClear,
            Key::Delete,
            Key::Operation(Operation::Divide),
        ]];
        for (row, operation) in ["123", "456", "789"]
            .into_iter()
            .zip([Operation::Multiply, Operation::Add, Operation::Subtract])
        {
            let mut keys = digits(row);
            keys.push(Key::Operation(operation));
            rows.push(keys);
        }
        let mut last = digits(".0");
        last.push(Key::Equals);
        rows.push(last);

        rows
    }

    /// The action this key dispatches.
    pub fn action(self) -> Action {
        match self {
            Self::Digit(digit) => Action::add_digit(digit),
            Self::Operation(operation) => Action::choose_operation(operation),
            Self::Equals => Action::Evaluate,
            Self::AllClear => Action::AllClear,
            Self::Delete => Action::DeleteDigit,
        }
    }

    /// Parse a single-character label.
    fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equals),
            '/' => Some(Self::Operation(Operation::Divide)),
            _ => Digit::new(c).map(Self::Digit).or_else(|| {
                let mut buf = [0; 4];
                Operation::from_symbol(c.encode_utf8(&mut buf)).map(Self::Operation)
            }),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit),
            Self::Operation(operation) => write!(f, "{}", operation),
            Self::Equals => f.write_str("="),
            Self::AllClear => f.write_str("AC"),
            Self::Delete => f.write_str("DEL"),
        }
    }
}

impl FromStr for Key {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ac") {
            return Ok(Self::AllClear);
        }
        if s.eq_ignore_ascii_case("del") {
            return Ok(Self::Delete);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ActionError::UnknownKey(s.to_string()))
    }
}

/// Parse whitespace-separated key labels.
///
/// A token that is not a label on its own but consists only of single
/// character keys is split per character, so `"12+3="` is five keys.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, ActionError> {
    let mut keys = Vec::new();

    for token in input.split_whitespace() {
        if let Ok(key) = token.parse::<Key>() {
            keys.push(key);
            continue;
        }

        let split: Option<Vec<Key>> = token.chars().map(Key::from_char).collect();
        match split {
            Some(mut chars) => keys.append(&mut chars),
            None => return Err(ActionError::UnknownKey(token.to_string())),
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_labels() {
        assert_eq!("AC".parse::<Key>().unwrap(), Key::AllClear);
        assert_eq!("del".parse::<Key>().unwrap(), Key::Delete);
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operation(Operation::Divide));
        assert_eq!("/".parse::<Key>().unwrap(), Key::Operation(Operation::Divide));
        assert_eq!(".".parse::<Key>().unwrap(), Key::Digit(Digit::POINT));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert!("%".parse::<Key>().is_err());
        assert!("sqrt".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(Key::Equals.action(), Action::Evaluate);
        assert_eq!(Key::AllClear.action(), Action::AllClear);
        assert_eq!(Key::Delete.action(), Action::DeleteDigit);
        assert_eq!(
            Key::Operation(Operation::Add).action(),
            Action::choose_operation(Operation::Add)
        );
    }

    #[test]
    fn test_parse_keys_splits_compact_tokens() {
        let keys = parse_keys("12+3=").unwrap();
        let labels: Vec<String> = keys.iter().map(Key::to_string).collect();
        assert_eq!(labels, ["1", "2", "+", "3", "="]);
    }

    #[test]
    fn test_parse_keys_mixed() {
        let keys = parse_keys("9 ÷ 3 = DEL AC").unwrap();
        assert_eq!(keys.len(), 6);
        assert_eq!(keys[4], Key::Delete);
        assert_eq!(keys[5], Key::AllClear);
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        assert!(parse_keys("1 + x").is_err());
    }

    #[test]
    fn test_layout_covers_every_key() {
        let layout = Key::layout();
        assert_eq!(layout.len(), 5);
        let count: usize = layout.iter().map(Vec::len).sum();
        // 10 digits, the point, 4 operators, =, AC, DEL
        assert_eq!(count, 18);
        assert_eq!(layout[0][0], Key::AllClear);
        assert_eq!(layout[4][2], Key::Equals);
    }
}
