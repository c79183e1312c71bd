//! Actions accepted by the reducer and their JSON record form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::calculator::Operation;
use crate::error::ActionError;

/// A single keypad digit: `0` to `9`, or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    /// Returns `None` unless `c` is an ASCII digit or `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = ActionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| ActionError::InvalidDigit(c.to_string()))
    }
}

impl FromStr for Digit {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ActionError::InvalidDigit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Digit {
    type Error = ActionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.0.to_string()
    }
}

/// Something the user did.
///
/// Serialized as a `{"type": ..., "payload": ...}` record, for example
/// `{"type": "add-digit", "payload": {"digit": "5"}}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    AddDigit { digit: Digit },
    ChooseOperation { operation: Operation },
    AllClear,
    DeleteDigit,
    Evaluate,
}

#[derive(Deserialize)]
struct DigitPayload {
    digit: Digit,
}

#[derive(Deserialize)]
struct OperationPayload {
    operation: Operation,
}

impl Action {
    /// Record type tags, one per variant.
    pub const KINDS: [&'static str; 5] = [
        "add-digit",
        "choose-operation",
        "all-clear",
        "delete-digit",
        "evaluate",
    ];

    /// The record type tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit { .. } => "add-digit",
            Self::ChooseOperation { .. } => "choose-operation",
            Self::AllClear => "all-clear",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }

    pub fn add_digit(digit: Digit) -> Self {
        Self::AddDigit { digit }
    }

    pub fn choose_operation(operation: Operation) -> Self {
        Self::ChooseOperation { operation }
    }

    /// Parse a JSON action record.
    ///
    /// Returns `Ok(None)` when the record's `type` is missing or not one of
    /// [`Action::KINDS`]; such records are ignored by the reducer. Invalid
    /// JSON, or a known type with a bad payload, is an error.
    pub fn from_record(record: &str) -> Result<Option<Self>, ActionError> {
        let value: Value = serde_json::from_str(record)?;
        Self::from_value(value)
    }

    /// Like [`Action::from_record`], for an already parsed JSON value.
    pub fn from_value(mut value: Value) -> Result<Option<Self>, ActionError> {
        let payload = value
            .get_mut("payload")
            .map(Value::take)
            .unwrap_or(Value::Null);
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();

        let action = match kind {
            "add-digit" => {
                let DigitPayload { digit } = serde_json::from_value(payload)?;
                Self::AddDigit { digit }
            }
            "choose-operation" => {
                let OperationPayload { operation } = serde_json::from_value(payload)?;
                Self::ChooseOperation { operation }
            }
            "all-clear" => Self::AllClear,
            "delete-digit" => Self::DeleteDigit,
            "evaluate" => Self::Evaluate,
            other => {
                debug!(kind = other, "Ignoring action record of unknown type");
                return Ok(None);
            }
        };

        Ok(Some(action))
    }
}
