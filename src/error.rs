use thiserror::Error;

use crate::gate::GateKind;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// The name is not one of the seven gate kinds.
    #[error("invalid gate kind `{0}`")]
    InvalidGateKind(String),

    /// The number of input signals does not match the arity of the gate kind.
    #[error("{kind} gate expects {expected} input(s), got {found}")]
    WrongInputCount {
        kind: GateKind,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur while interpreting a command stream.
///
/// All of them abort interpretation of the remaining stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The token in command position is neither a keyword nor a gate kind.
    #[error("unknown command or gate kind `{0}`")]
    UnknownCommand(String),

    /// The stream ended before the command received all of its arguments.
    #[error("malformed `{command}` command: expected {expected}")]
    MalformedCommand {
        command: String,
        expected: &'static str,
    },

    /// The value given to `SET` is not an integer.
    #[error("invalid value `{value}` for signal `{signal}`")]
    InvalidValue { signal: String, value: String },

    /// Building the circuit failed.
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Reading tokens or writing output failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InterpretError {
    fn from(e: std::io::Error) -> Self {
        InterpretError::Io(e.to_string())
    }
}
