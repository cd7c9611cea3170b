use std::{fmt, iter, str::FromStr};

use itertools::{Either, Itertools};

use crate::{
    error::CircuitError,
    signal::{SignalId, SignalRegistry},
};

/// The kind of a gate, as named in the command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Xnor,
    Not,
}

impl GateKind {
    pub const ALL: [GateKind; 7] = [
        GateKind::And,
        GateKind::Nand,
        GateKind::Or,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
        GateKind::Not,
    ];

    /// Returns the keyword used for this kind in the command language.
    pub fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Nand => "NAND",
            GateKind::Or => "OR",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
            GateKind::Not => "NOT",
        }
    }

    /// Returns the number of input signals a gate of this kind reads.
    pub fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CircuitError::InvalidGateKind(s.to_string()))
    }
}

/// The boolean function of a gate together with its input signals.
///
/// The variants fix the number of inputs, so a NOT gate can never
/// carry two inputs and a binary gate can never carry one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    And(SignalId, SignalId),
    Nand(SignalId, SignalId),
    Or(SignalId, SignalId),
    Nor(SignalId, SignalId),
    Xor(SignalId, SignalId),
    Xnor(SignalId, SignalId),
    Not(SignalId),
}

impl Operation {
    /// Builds the operation of the given kind over `inputs`.
    ///
    /// Fails if the number of inputs does not match the kind's arity.
    pub fn new(kind: GateKind, inputs: &[SignalId]) -> Result<Self, CircuitError> {
        let operation = match (kind, inputs) {
            (GateKind::Not, &[a]) => Operation::Not(a),
            (GateKind::And, &[a, b]) => Operation::And(a, b),
            (GateKind::Nand, &[a, b]) => Operation::Nand(a, b),
            (GateKind::Or, &[a, b]) => Operation::Or(a, b),
            (GateKind::Nor, &[a, b]) => Operation::Nor(a, b),
            (GateKind::Xor, &[a, b]) => Operation::Xor(a, b),
            (GateKind::Xnor, &[a, b]) => Operation::Xnor(a, b),
            _ => {
                return Err(CircuitError::WrongInputCount {
                    kind,
                    expected: kind.arity(),
                    found: inputs.len(),
                })
            }
        };
        Ok(operation)
    }

    pub fn kind(&self) -> GateKind {
        match self {
            Operation::And(..) => GateKind::And,
            Operation::Nand(..) => GateKind::Nand,
            Operation::Or(..) => GateKind::Or,
            Operation::Nor(..) => GateKind::Nor,
            Operation::Xor(..) => GateKind::Xor,
            Operation::Xnor(..) => GateKind::Xnor,
            Operation::Not(..) => GateKind::Not,
        }
    }

    /// Returns the input signals in declaration order.
    pub fn inputs(&self) -> impl Iterator<Item = SignalId> {
        match *self {
            Operation::And(a, b)
            | Operation::Nand(a, b)
            | Operation::Or(a, b)
            | Operation::Nor(a, b)
            | Operation::Xor(a, b)
            | Operation::Xnor(a, b) => Either::Left([a, b].into_iter()),
            Operation::Not(a) => Either::Right(iter::once(a)),
        }
    }
}

/// A gate in a circuit: an operation over input signals that writes
/// its result into a single output signal.
///
/// Gates are anonymous; their identity is their position in the circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gate {
    operation: Operation,
    output: SignalId,
}

impl Gate {
    pub fn new(operation: Operation, output: SignalId) -> Self {
        Gate { operation, output }
    }

    /// Returns the operation of the gate.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn kind(&self) -> GateKind {
        self.operation.kind()
    }

    pub fn output(&self) -> SignalId {
        self.output
    }

    /// Turns the gate into its declaration in the command language,
    /// e.g. `AND A B C`.
    pub fn to_command(&self, signals: &SignalRegistry) -> String {
        format!(
            "{} {} {}",
            self.kind(),
            self.operation.inputs().map(|id| signals.name(id)).format(" "),
            signals.name(self.output)
        )
    }
}
