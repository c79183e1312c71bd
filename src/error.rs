//! Error types for the boundaries around the calculator core.
//!
//! The reducer itself never fails: invalid input is absorbed as a no-op or a
//! sentinel string. Errors only appear where raw input is turned into typed
//! values (keys, action records, config files) and around the dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn raw input into an [`Action`](crate::state::Action).
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("invalid digit {0:?}, expected 0-9 or '.'")]
    InvalidDigit(String),

    #[error("unknown operator {0:?}, expected one of + - * ÷")]
    UnknownOperator(String),

    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("malformed action record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Failure to load a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure to talk to a [`Dispatcher`](crate::state::Dispatcher) worker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("dispatcher worker has shut down")]
    Disconnected,

    #[error("dispatcher worker panicked")]
    WorkerPanicked,
}
