//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} not found in circuit")]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
    },

    /// Measurement targets a different number of qubits and classical bits.
    #[error("Measurement over {qubits} qubits needs {qubits} classical bits, got {clbits}")]
    ClbitCountMismatch {
        /// Number of measured qubits.
        qubits: usize,
        /// Number of classical bits supplied.
        clbits: usize,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Circuit JSON could not be read or written.
    #[error("Invalid circuit JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_context_in_message() {
        let err = IrError::QubitNotFound {
            qubit: QubitId(3),
            gate_name: Some("cx".into()),
        };
        assert_eq!(err.to_string(), "Qubit q3 not found in circuit (gate: cx)");

        let err = IrError::DuplicateQubit {
            qubit: QubitId(0),
            gate_name: None,
        };
        assert_eq!(err.to_string(), "Duplicate qubit q0 in operation");
    }
}
