//! JSON circuit format.
//!
//! ```json
//! {
//!   "name": "bell",
//!   "num_qubits": 2,
//!   "num_clbits": 2,
//!   "instructions": [
//!     { "gate": "h", "qubits": [0] },
//!     { "gate": "cx", "qubits": [0, 1] },
//!     { "barrier": [0, 1] },
//!     { "measure": [0, 1], "clbits": [0, 1] }
//!   ]
//! }
//! ```
//!
//! Loading replays every instruction through [`Circuit::apply`], so a circuit
//! read from JSON satisfies the same operand invariants as one built in code.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

#[derive(Debug, Serialize, Deserialize)]
struct CircuitFile {
    #[serde(default)]
    name: String,
    num_qubits: u32,
    #[serde(default)]
    num_clbits: u32,
    #[serde(default)]
    instructions: Vec<InstructionEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum InstructionEntry {
    Gate {
        gate: String,
        qubits: Vec<QubitId>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        params: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Measure {
        measure: Vec<QubitId>,
        clbits: Vec<ClbitId>,
    },
    Barrier {
        barrier: Vec<QubitId>,
    },
}

impl From<InstructionEntry> for Instruction {
    fn from(entry: InstructionEntry) -> Self {
        match entry {
            InstructionEntry::Gate {
                gate,
                qubits,
                params,
                label,
            } => Instruction::gate(Gate { name: gate, params, label }, qubits),
            InstructionEntry::Measure { measure, clbits } => {
                Instruction::measure_many(measure, clbits)
            }
            InstructionEntry::Barrier { barrier } => Instruction::barrier(barrier),
        }
    }
}

impl From<&Instruction> for InstructionEntry {
    fn from(inst: &Instruction) -> Self {
        match &inst.kind {
            InstructionKind::Gate(gate) => InstructionEntry::Gate {
                gate: gate.name.clone(),
                qubits: inst.qubits.clone(),
                params: gate.params.clone(),
                label: gate.label.clone(),
            },
            InstructionKind::Measure => InstructionEntry::Measure {
                measure: inst.qubits.clone(),
                clbits: inst.clbits.clone(),
            },
            InstructionKind::Barrier => InstructionEntry::Barrier {
                barrier: inst.qubits.clone(),
            },
        }
    }
}

impl Circuit {
    /// Load a circuit from its JSON description.
    pub fn from_json(source: &str) -> IrResult<Self> {
        let file: CircuitFile = serde_json::from_str(source)?;
        let mut circuit = Circuit::with_size(file.name, file.num_qubits, file.num_clbits);
        for entry in file.instructions {
            circuit.apply(entry.into())?;
        }
        Ok(circuit)
    }

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        let file = CircuitFile {
            name: self.name().to_string(),
            num_qubits: u32::try_from(self.num_qubits()).unwrap_or(u32::MAX),
            num_clbits: u32::try_from(self.num_clbits()).unwrap_or(u32::MAX),
            instructions: self.instructions().iter().map(Into::into).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}
