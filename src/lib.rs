pub mod circuit;
pub mod error;
mod evaluator;
pub mod file_formats;
pub mod gate;
pub mod interpreter;
pub mod io;
pub mod signal;

pub use circuit::Circuit;
pub use error::{CircuitError, InterpretError};
pub use evaluator::{evaluate_gate, evaluate_operation};
pub use gate::{Gate, GateKind, Operation};
pub use interpreter::{run_str, Command, Interpreter};
pub use io::{LineSink, StrTokens, TokenSource, WhitespaceTokens, WriteSink};
pub use signal::{SignalId, SignalRegistry, Value};
