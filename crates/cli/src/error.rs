//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: simulation/widget error (bad dimensions, unmounted frame)
//! - 11: I/O error (preset read, snapshot write)
//! - 12: input error (bad JSON params, invalid preset)
//! - 13: serialization error

use driftnet_core::FieldError;
use driftnet_widget::WidgetError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A simulation or widget lifecycle error.
    Sim(String),
    /// An I/O error (preset read, snapshot write).
    Io(String),
    /// A user input error (bad JSON params, invalid preset contents).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sim(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sim(msg)
            | CliError::Io(msg)
            | CliError::Input(msg)
            | CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::Io(msg) => CliError::Io(msg),
            FieldError::InvalidPreset(msg) => CliError::Input(msg),
            other => CliError::Sim(other.to_string()),
        }
    }
}

impl From<WidgetError> for CliError {
    fn from(e: WidgetError) -> Self {
        match e {
            WidgetError::Field(inner) => CliError::from(inner),
            other => CliError::Sim(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
