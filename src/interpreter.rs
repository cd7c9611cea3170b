use log::trace;

use crate::{
    error::InterpretError,
    io::{LineSink, StrTokens, TokenSource},
    signal::Value,
    Circuit, GateKind,
};

/// A single parsed command of the command language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `SET <signal> <value>`
    Set { signal: String, value: Value },
    /// `OUT ALL`
    OutAll,
    /// `OUT <signal>`
    Out(String),
    /// `SIM`
    Sim,
    /// `END`
    End,
    /// `<KIND> <inputs...> <output>`
    Gate {
        kind: GateKind,
        inputs: Vec<String>,
        output: String,
    },
}

/// Reads the next complete command from `source`.
///
/// Returns `None` if the stream ends before a command starts.
pub fn read_command(source: &mut impl TokenSource) -> Result<Option<Command>, InterpretError> {
    let Some(word) = source.next_token()? else {
        return Ok(None);
    };
    trace!("command token `{word}`");
    let command = match word.as_str() {
        "SET" => {
            let expected = "a signal name and an integer value";
            let signal = expect_token(source, &word, expected)?;
            let value = expect_token(source, &word, expected)?;
            let value = value
                .parse::<Value>()
                .map_err(|_| InterpretError::InvalidValue {
                    signal: signal.clone(),
                    value,
                })?;
            Command::Set { signal, value }
        }
        "OUT" => match expect_token(source, &word, "a signal name or ALL")? {
            target if target == "ALL" => Command::OutAll,
            target => Command::Out(target),
        },
        "SIM" => Command::Sim,
        "END" => Command::End,
        _ => {
            let kind: GateKind = word
                .parse()
                .map_err(|_| InterpretError::UnknownCommand(word.clone()))?;
            let expected = match kind.arity() {
                1 => "an input signal and an output signal",
                _ => "two input signals and an output signal",
            };
            let inputs = (0..kind.arity())
                .map(|_| expect_token(source, &word, expected))
                .collect::<Result<Vec<_>, _>>()?;
            let output = expect_token(source, &word, expected)?;
            Command::Gate {
                kind,
                inputs,
                output,
            }
        }
    };
    Ok(Some(command))
}

fn expect_token(
    source: &mut impl TokenSource,
    command: &str,
    expected: &'static str,
) -> Result<String, InterpretError> {
    source
        .next_token()?
        .ok_or_else(|| InterpretError::MalformedCommand {
            command: command.to_string(),
            expected,
        })
}

/// Executes a command stream against a [`Circuit`], printing the
/// output of `OUT` commands to a [`LineSink`].
pub struct Interpreter<S, O> {
    source: S,
    sink: O,
    circuit: Circuit,
}

impl<S: TokenSource, O: LineSink> Interpreter<S, O> {
    /// Creates an interpreter over an empty circuit.
    pub fn new(source: S, sink: O) -> Self {
        Self::with_circuit(source, sink, Circuit::new())
    }

    /// Creates an interpreter that continues building `circuit`.
    pub fn with_circuit(source: S, sink: O, circuit: Circuit) -> Self {
        Self {
            source,
            sink,
            circuit,
        }
    }

    /// Processes commands until `END` or the end of the stream.
    ///
    /// Stops at the first error; lines emitted before it remain emitted
    /// and the circuit keeps the changes made so far.
    pub fn run(&mut self) -> Result<(), InterpretError> {
        while let Some(command) = read_command(&mut self.source)? {
            if command == Command::End {
                break;
            }
            self.execute(command)?;
        }
        Ok(())
    }

    /// Executes a single command. `END` has no effect here; it only
    /// terminates [`Interpreter::run`].
    pub fn execute(&mut self, command: Command) -> Result<(), InterpretError> {
        match command {
            Command::Set { signal, value } => self.circuit.set_signal(&signal, value),
            Command::OutAll => {
                for (name, value) in self.circuit.signals().iter() {
                    self.sink.emit_line(&format!("{name}: {value}"))?;
                }
            }
            Command::Out(name) => {
                let value = self.circuit.signal_value(&name);
                self.sink.emit_line(&format!("{name}: {value}"))?;
            }
            Command::Sim => self.circuit.simulate(),
            Command::End => {}
            Command::Gate {
                kind,
                inputs,
                output,
            } => {
                let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
                self.circuit.add_gate(kind, &inputs, &output)?;
            }
        }
        Ok(())
    }

    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    pub fn into_parts(self) -> (Circuit, O) {
        (self.circuit, self.sink)
    }
}

/// Interprets a whole command stream given as a string and returns the
/// printed lines.
pub fn run_str(input: &str) -> Result<Vec<String>, InterpretError> {
    let mut interpreter = Interpreter::new(StrTokens::new(input.split_whitespace()), vec![]);
    interpreter.run()?;
    Ok(interpreter.into_parts().1)
}
