use crate::{
    signal::{SignalId, SignalRegistry, Value},
    Gate, Operation,
};

/// Computes the boolean function of `operation`, reading input values
/// through `read`. Inputs are true if and only if they are non-zero.
pub fn evaluate_operation(operation: &Operation, read: impl Fn(SignalId) -> Value) -> bool {
    let on = |id| read(id) != 0;
    match *operation {
        Operation::And(a, b) => on(a) && on(b),
        Operation::Nand(a, b) => !(on(a) && on(b)),
        Operation::Or(a, b) => on(a) || on(b),
        Operation::Nor(a, b) => !(on(a) || on(b)),
        Operation::Xor(a, b) => on(a) != on(b),
        Operation::Xnor(a, b) => on(a) == on(b),
        Operation::Not(a) => !on(a),
    }
}

/// Evaluates `gate` against the current signal values and stores the
/// result (0 or 1) in its output signal. Returns the stored value.
pub fn evaluate_gate(gate: &Gate, signals: &mut SignalRegistry) -> Value {
    let value = Value::from(evaluate_operation(gate.operation(), |id| signals.value(id)));
    signals.set_value(gate.output(), value);
    value
}
