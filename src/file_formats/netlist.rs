use std::io::Write;

use crate::Circuit;

/// Writes the circuit to the given writer in the command language, so that
/// interpreting the output rebuilds an equivalent circuit.
///
/// Emits a `SET` line for every signal with a non-zero value (in creation
/// order), then every gate declaration in evaluation order, then `END`.
/// Signals with value 0 are only re-created when a gate references them,
/// so their relative creation order is not preserved.
pub fn to_netlist(mut w: impl Write, circuit: &Circuit) -> Result<(), std::io::Error> {
    for (name, value) in circuit.signals().iter().filter(|(_, value)| *value != 0) {
        writeln!(w, "SET {name} {value}")?;
    }
    for gate in circuit.gates() {
        writeln!(w, "{}", gate.to_command(circuit.signals()))?;
    }
    writeln!(w, "END")
}
