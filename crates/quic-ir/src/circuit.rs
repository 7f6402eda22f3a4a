//! High-level circuit builder API.

use std::collections::HashSet;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// Holds a declared qubit and classical-bit register plus the ordered list of
/// instructions applied to it. Operands are validated as instructions are
/// appended, so every instruction in a `Circuit` refers to declared wires.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of declared qubits.
    num_qubits: u32,
    /// Number of declared classical bits.
    num_clbits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            num_qubits,
            num_clbits,
            ..Self::new(name)
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = || instruction.as_gate().map(|g| g.name().to_string());

        let mut seen = HashSet::with_capacity(instruction.qubits.len());
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name(),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name(),
                });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound { clbit });
            }
        }

        if instruction.is_measure() && instruction.qubits.len() != instruction.clbits.len() {
            return Err(IrError::ClbitCountMismatch {
                qubits: instruction.qubits.len(),
                clbits: instruction.clbits.len(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply identity gate.
    pub fn id(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("id", qubit))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("h", qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("x", qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("y", qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("z", qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("s", qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("sdg", qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("t", qubit))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("tdg", qubit))
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("sx", qubit))
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate("sxdg", qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            Gate::new("rx").with_params([theta]),
            qubit,
        ))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            Gate::new("ry").with_params([theta]),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            Gate::new("rz").with_params([theta]),
            qubit,
        ))
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            Gate::new("u").with_params([theta, phi, lambda]),
            qubit,
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate("cx", control, target))
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate("cy", control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate("cz", control, target))
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate("ch", control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate("swap", q1, q2))
    }

    /// Apply controlled-U gate CU(θ, φ, λ, γ), where γ is the global phase.
    pub fn cu(
        &mut self,
        theta: f64,
        phi: f64,
        lambda: f64,
        gamma: f64,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            Gate::new("cu").with_params([theta, phi, lambda, gamma]),
            control,
            target,
        ))
    }

    /// Apply controlled phase gate.
    pub fn cp(&mut self, lambda: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            Gate::new("cp").with_params([lambda]),
            control,
            target,
        ))
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate("ccx", [c1, c2, target]))
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate("cswap", [control, t1, t2]))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply an arbitrary named gate.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure all qubits to corresponding classical bits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        // Ensure we have enough classical bits
        while self.num_clbits < self.num_qubits {
            self.add_clbit();
        }

        let qubits = (0..self.num_qubits).map(QubitId);
        let clbits = (0..self.num_qubits).map(ClbitId);
        self.apply(Instruction::measure_many(qubits, clbits))
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits = (0..self.num_qubits).map(QubitId);
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of declared qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of declared classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions, including measurements and barriers.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the gate instructions only.
    pub fn gates(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions
            .iter()
            .filter(|inst| matches!(inst.kind, InstructionKind::Gate(_)))
    }

    // =========================================================================
    // Standard circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        circuit.measure_all()?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit on `n` qubits.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size(format!("ghz_{n}"), n, n);
        if n == 0 {
            return Ok(circuit);
        }
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        circuit.measure_all()?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 5, 3);
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 3);
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        let names: Vec<_> = circuit.instructions().iter().map(Instruction::name).collect();
        assert_eq!(names, ["h", "cx", "measure"]);
    }

    #[test]
    fn test_ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.gates().count(), 5);
    }

    #[test]
    fn test_parameterized_gate() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit
            .cu(PI / 2.0, 0.0, PI, 0.1, QubitId(0), QubitId(1))
            .unwrap();
        assert_eq!(circuit.instructions()[0].params(), &[PI / 2.0, 0.0, PI, 0.1]);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .ccx(QubitId(0), QubitId(1), QubitId(2))
            .unwrap();
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(0), QubitId(2)).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitNotFound { qubit: QubitId(2), gate_name: Some(ref g) } if g == "cx"
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.swap(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { qubit: QubitId(1), .. }));
    }

    #[test]
    fn test_measure_requires_clbit() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.measure(QubitId(0), ClbitId(0)).unwrap_err();
        assert!(matches!(err, IrError::ClbitNotFound { clbit: ClbitId(0) }));
    }

    #[test]
    fn test_measure_all_grows_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 1);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.instructions()[0].clbits.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Circuit::with_size("test", 1, 0);
        original.h(QubitId(0)).unwrap();
        let mut copy = original.clone();
        copy.x(QubitId(0)).unwrap();
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
