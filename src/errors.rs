//! Error types for demonstration runs
//!
//! This module defines [`DemoError`], which represents everything that can stop
//! a demonstration before it finishes (as opposed to I/O errors from the
//! terminal backend, which stay `io::Error`).
//!
//! All demo errors are fatal - they halt the demonstration and display a
//! diagnostic message. That is deliberate: malformed input and reads of
//! unbound names are teaching points, not conditions to recover from.

use std::fmt;

/// Errors that can occur while a demonstration is running
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    /// Looked up a name with no current binding
    UnboundName { name: String },

    /// Attempted to bind a reserved word as a name
    ReservedName { name: String },

    /// A value had the wrong kind for the requested operation
    TypeMismatch { expected: String, got: String },

    /// Interactive input could not be parsed as the expected kind
    MalformedInput { expected: &'static str, text: String },

    /// Input ended while a prompt was waiting for a line
    InputClosed { prompt: String },

    /// No demonstration with the given name exists in the catalog
    UnknownDemo { name: String },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::UnboundName { name } => {
                write!(f, "name '{}' is not bound", name)
            }
            DemoError::ReservedName { name } => {
                write!(f, "'{}' is a reserved word and cannot be used as a name", name)
            }
            DemoError::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {}, got {}", expected, got)
            }
            DemoError::MalformedInput { expected, text } => {
                write!(f, "malformed input: expected {}, got '{}'", expected, text)
            }
            DemoError::InputClosed { prompt } => {
                write!(f, "input ended while waiting for: {}", prompt.trim_end())
            }
            DemoError::UnknownDemo { name } => {
                write!(f, "no demonstration named '{}'", name)
            }
        }
    }
}

impl std::error::Error for DemoError {}
