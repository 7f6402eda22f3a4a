//! Error types for the quicscript encoder.

use thiserror::Error;

/// Errors that can occur while encoding a circuit.
///
/// Every variant is fatal for the encode call: no partial output is produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// Gate name outside the fixed quicscript gate set.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Gate applied to a number of qubits that does not match its slot codes.
    #[error("Gate '{gate}' expects {expected} qubits, got {got}")]
    QubitCountMismatch {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Gate targets a qubit outside the row.
    #[error("Gate '{gate}' targets qubit {qubit} outside a row of width {width}")]
    QubitOutOfRange {
        gate: String,
        qubit: usize,
        width: usize,
    },

    /// Parameter list of a header-carrying gate has an unexpected length.
    #[error("Gate '{gate}' cannot encode {got} parameters")]
    MalformedParameters { gate: String, got: usize },
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
