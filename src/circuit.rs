use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::CircuitError,
    evaluator::evaluate_gate,
    signal::{SignalRegistry, Value},
    Gate, GateKind, Operation,
};

/// A logic circuit: the named signals and an ordered list of gates
/// connecting them.
///
/// Gates are evaluated strictly in the order they were added, not in
/// dependency order.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    signals: SignalRegistry,
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a gate of the given kind, creating any signal that is
    /// referenced for the first time. Inputs are resolved before the output.
    ///
    /// Returns the position of the new gate.
    pub fn add_gate(
        &mut self,
        kind: GateKind,
        inputs: &[&str],
        output: &str,
    ) -> Result<usize, CircuitError> {
        let inputs = inputs
            .iter()
            .map(|name| self.signals.resolve(name))
            .collect_vec();
        let output = self.signals.resolve(output);
        let gate = Gate::new(Operation::new(kind, &inputs)?, output);
        debug!("declared gate {}", gate.to_command(&self.signals));
        self.gates.push(gate);
        Ok(self.gates.len() - 1)
    }

    /// Runs a single pass over all gates in declaration order.
    ///
    /// Each gate sees the outputs of gates evaluated before it in the same
    /// pass, and the previous values of signals written by later gates.
    /// Feedback loops are not detected; they just read stale values.
    pub fn simulate(&mut self) {
        debug!("simulating {} gate(s)", self.gate_count());
        for (index, gate) in self.gates.iter().enumerate() {
            let value = evaluate_gate(gate, &mut self.signals);
            trace!(
                "gate {index} ({}) -> {value}",
                gate.to_command(&self.signals)
            );
        }
    }

    /// Sets the value of the signal called `name`, creating it if needed.
    pub fn set_signal(&mut self, name: &str, value: Value) {
        let id = self.signals.resolve(name);
        self.signals.set_value(id, value);
    }

    /// Returns the value of the signal called `name`, creating it with
    /// value 0 if it does not exist yet.
    pub fn signal_value(&mut self, name: &str) -> Value {
        let id = self.signals.resolve(name);
        self.signals.value(id)
    }

    /// Returns the value of the signal called `name` if it exists.
    pub fn peek_value(&self, name: &str) -> Option<Value> {
        self.signals.get(name).map(|id| self.signals.value(id))
    }

    /// Returns all signals with their values in the order they were
    /// first referenced.
    pub fn all_signals(&self) -> Vec<(&str, Value)> {
        self.signals.iter().collect()
    }

    pub fn signals(&self) -> &SignalRegistry {
        &self.signals
    }

    /// Returns the gates in declaration (and evaluation) order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the number of gates evaluated by each [`Circuit::simulate`] pass.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }
}
