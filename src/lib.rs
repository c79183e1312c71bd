//! Four-function keypad calculator built around a pure state reducer.
//!
//! Key presses become [`Action`]s, [`reduce`] turns the current
//! [`CalculatorState`] and an action into the next state, and
//! [`DisplayLines`] formats a state for the screen.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod keypad;
pub mod state;

pub use calculator::{NumberLocale, Operation};
pub use config::Config;
pub use display::DisplayLines;
pub use error::{ActionError, ConfigError, DispatchError};
pub use keypad::{Key, parse_keys};
pub use state::{Action, CalculatorState, Digit, DispatchHandle, Dispatcher, Store, reduce};
