//! Quicscript encoder for serializing circuits.

use quic_ir::{Circuit, Instruction, QubitId};
use tracing::{debug, instrument, trace};

use crate::compact::compact_string;
use crate::config::EncoderConfig;
use crate::error::{EncodeError, EncodeResult};
use crate::gate::{IDENTITY, QuicGate};

/// Separator between gate blocks in the file string.
const BLOCK_SEPARATOR: &str = ",\n";

/// Terminator of the file string.
const TERMINATOR: char = ':';

/// Instruction names with no quicscript row. Matched by name so that named
/// gates called `measure` or `barrier` are treated like the dedicated kinds.
const MEASURE: &str = "measure";
const BARRIER: &str = "barrier";

/// Encode a circuit as a quicscript file string using the default
/// configuration.
pub fn encode_file_string(circuit: &Circuit) -> EncodeResult<String> {
    Encoder::default().encode_file_string(circuit)
}

/// Encode a circuit as a compact quicscript string using the default
/// configuration.
pub fn encode_compact_string(circuit: &Circuit) -> EncodeResult<String> {
    Encoder::default().encode_compact_string(circuit)
}

/// Quicscript encoder.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// The encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a circuit as a file string: a `# N` header line, one block per
    /// gate joined by `,\n`, and a trailing `:`.
    #[instrument(skip_all, fields(circuit = circuit.name()))]
    pub fn encode_file_string(&self, circuit: &Circuit) -> EncodeResult<String> {
        let instructions = filter_measurements(circuit.instructions());
        let width = row_width(&instructions);

        debug!(
            "Encoding {} instructions over {} declared qubits, row width {}",
            instructions.len(),
            circuit.num_qubits(),
            width
        );

        let mut blocks = Vec::with_capacity(instructions.len());
        for instruction in &instructions {
            if let Some(block) = self.encode_block(instruction, width)? {
                blocks.push(block);
            }
        }

        let mut output = format!("# {}\n", circuit.num_qubits());
        output.push_str(&blocks.join(BLOCK_SEPARATOR));
        output.push(TERMINATOR);

        debug!("Encoded {} gate blocks", blocks.len());
        Ok(output)
    }

    /// Encode a circuit as a compact string: the rows only, without
    /// parameter headers or separators.
    pub fn encode_compact_string(&self, circuit: &Circuit) -> EncodeResult<String> {
        let file_string = self.encode_file_string(circuit)?;
        Ok(compact_string(&file_string))
    }

    /// Encode one instruction as an optional header line plus its row.
    ///
    /// Barriers have no quicscript form and yield `None`.
    fn encode_block(&self, instruction: &Instruction, width: usize) -> EncodeResult<Option<String>> {
        if matches!(instruction.name(), BARRIER | MEASURE) {
            trace!("Skipping {}", instruction.name());
            return Ok(None);
        }

        let quic_gate = QuicGate::from_name(instruction.name())?;
        let row = build_row(quic_gate, &instruction.qubits, width)?;
        let header =
            quic_gate.parameter_header(instruction.params(), self.config.parameter_arity)?;

        trace!(gate = quic_gate.name(), %row, "Encoded gate");

        Ok(Some(match header {
            Some(header) => format!("{header}\n{row}"),
            None => row,
        }))
    }
}

/// Copy the instruction list without anything named `measure`.
///
/// Quicscript has no slot for measurement outcomes, so measurements are
/// dropped rather than re-inserted.
pub fn filter_measurements(instructions: &[Instruction]) -> Vec<Instruction> {
    instructions
        .iter()
        .filter(|inst| inst.name() != MEASURE)
        .cloned()
        .collect()
}

/// Row width: highest referenced qubit index plus one, at least one.
///
/// Barriers count as references. Unused trailing qubits of the declared
/// register do not.
pub fn row_width(instructions: &[Instruction]) -> usize {
    instructions
        .iter()
        .flat_map(|inst| &inst.qubits)
        .map(|q| q.index() + 1)
        .max()
        .unwrap_or(1)
}

/// Lay a gate's slot codes onto an identity row of `width` characters.
///
/// An empty qubit list yields an all-identity row. A qubit at or beyond
/// `width` is an error; [`row_width`] over the same instructions never
/// produces one.
pub fn build_row(gate: QuicGate, qubits: &[QubitId], width: usize) -> EncodeResult<String> {
    let mut row = vec![IDENTITY; width];
    if qubits.is_empty() {
        return Ok(row.into_iter().collect());
    }

    let codes = gate.slot_codes();
    if qubits.len() != codes.len() {
        return Err(EncodeError::QubitCountMismatch {
            gate: gate.name().to_string(),
            expected: codes.len(),
            got: qubits.len(),
        });
    }

    for (qubit, &code) in qubits.iter().zip(codes) {
        let slot = row
            .get_mut(qubit.index())
            .ok_or_else(|| EncodeError::QubitOutOfRange {
                gate: gate.name().to_string(),
                qubit: qubit.index(),
                width,
            })?;
        *slot = code;
    }

    Ok(row.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quic_ir::{ClbitId, Gate};

    #[test]
    fn test_emit_hadamard() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 2\nH:");
    }

    #[test]
    fn test_emit_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(encode_file_string(&circuit).unwrap(), "# 2\nHI,\nCX:");
    }

    #[test]
    fn test_emit_reversed_cx() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.cx(QubitId(2), QubitId(0)).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 3\nXIC:");
    }

    #[test]
    fn test_emit_ry_header() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.ry(0.5, QubitId(0)).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 1\n{U 0.5 0 0}\nU:");
    }

    #[test]
    fn test_emit_mixed_headers() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit
            .h(QubitId(1))
            .unwrap()
            .cp(0.25, QubitId(1), QubitId(0))
            .unwrap()
            .cu(1.0, 2.0, 3.0, 4.0, QubitId(0), QubitId(1))
            .unwrap();

        assert_eq!(
            encode_file_string(&circuit).unwrap(),
            "# 2\nIH,\n{U 0 0 0.25}\nUC,\n{U 1 2 3}\nCU:"
        );
    }

    #[test]
    fn test_barrier_only() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.barrier_all().unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 2\n:");
    }

    #[test]
    fn test_barrier_widens_rows() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.x(QubitId(0)).unwrap();
        circuit.barrier_all().unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 3\nXII:");
    }

    #[test]
    fn test_measure_dropped_and_does_not_widen() {
        let mut circuit = Circuit::with_size("test", 3, 3);
        circuit.z(QubitId(0)).unwrap();
        circuit.measure(QubitId(2), ClbitId(2)).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 3\nZ:");
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::with_size("empty", 4, 0);
        assert_eq!(encode_file_string(&circuit).unwrap(), "# 4\n:");
    }

    #[test]
    fn test_unknown_gate_fails_whole_call() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.gate("iswap", [QubitId(0), QubitId(1)]).unwrap();

        let err = encode_file_string(&circuit).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownGate(ref name) if name == "iswap"));
    }

    #[test]
    fn test_wrong_qubit_count() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.gate("cx", [QubitId(0)]).unwrap();

        let err = encode_file_string(&circuit).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::QubitCountMismatch { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn test_empty_qubit_list_is_identity_row() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.x(QubitId(1)).unwrap();
        circuit.gate("h", Vec::<QubitId>::new()).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 2\nIX,\nII:");
    }

    #[test]
    fn test_lenient_config() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit
            .gate(Gate::new("ry").with_params([0.1, 0.2]), [QubitId(0)])
            .unwrap();

        assert!(encode_file_string(&circuit).is_err());

        let encoder = Encoder::new(EncoderConfig::lenient());
        assert_eq!(
            encoder.encode_file_string(&circuit).unwrap(),
            "# 1\n{U 0.1 0.2 0}\nU:"
        );
    }

    #[test]
    fn test_caller_circuit_untouched() {
        let circuit = Circuit::bell().unwrap();
        let before = circuit.clone();
        encode_file_string(&circuit).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_row_width() {
        assert_eq!(row_width(&[]), 1);
        let insts = [
            Instruction::single_qubit_gate("h", QubitId(4)),
            Instruction::barrier([QubitId(1)]),
        ];
        assert_eq!(row_width(&insts), 5);
    }

    #[test]
    fn test_build_row() {
        let row = build_row(QuicGate::CSwap, &[QubitId(3), QubitId(0), QubitId(1)], 4).unwrap();
        assert_eq!(row, "WWIC");
    }

    #[test]
    fn test_build_row_rejects_narrow_width() {
        let err = build_row(QuicGate::CX, &[QubitId(0), QubitId(3)], 2).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::QubitOutOfRange { qubit: 3, width: 2, .. }
        ));
    }

    #[test]
    fn test_gate_named_measure_is_dropped() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.gate("measure", [QubitId(2)]).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 3\nH:");
        assert_eq!(encode_compact_string(&circuit).unwrap(), "H");
    }

    #[test]
    fn test_gate_named_barrier_is_skipped() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.gate("barrier", [QubitId(0), QubitId(1)]).unwrap();

        assert_eq!(encode_file_string(&circuit).unwrap(), "# 2\nHI:");
        assert_eq!(encode_compact_string(&circuit).unwrap(), "HI");
    }

    #[test]
    fn test_filter_matches_by_name() {
        let insts = [
            Instruction::single_qubit_gate("measure", QubitId(1)),
            Instruction::measure(QubitId(2), ClbitId(0)),
            Instruction::single_qubit_gate("x", QubitId(0)),
        ];
        let kept = filter_measurements(&insts);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name(), "x");
    }
}
