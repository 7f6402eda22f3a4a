//! Quicscript Circuit Representation
//!
//! This crate provides the circuit data structures that the quicscript
//! encoder reads from. A [`Circuit`] is a declared qubit/classical-bit
//! register plus an ordered list of [`Instruction`]s; each instruction is a
//! named [`Gate`], a measurement, or a barrier applied to explicit
//! [`QubitId`]s.
//!
//! Gate names are not interpreted here. The builder methods use the
//! lowercase OpenQASM/Qiskit names (`h`, `cx`, `ry`, `cu`, `cp`, ...), and
//! [`Circuit::gate`] accepts any name so that the consumer decides what it
//! can lower.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use quic_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 3);
//! ```
//!
//! # Example: Loading JSON
//!
//! ```rust
//! use quic_ir::Circuit;
//!
//! let circuit = Circuit::from_json(
//!     r#"{ "num_qubits": 1, "instructions": [ { "gate": "ry", "qubits": [0], "params": [0.5] } ] }"#,
//! )
//! .unwrap();
//! assert_eq!(circuit.instructions()[0].params(), &[0.5]);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
mod json;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
