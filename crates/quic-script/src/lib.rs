//! Quicscript Encoder
//!
//! This crate serializes a [`quic_ir::Circuit`] into quicscript, the textual
//! circuit format read by the QuiC simulator.
//!
//! # Format
//!
//! Every gate becomes a row with one character per qubit. Untouched qubits
//! are `I`; the qubits the gate acts on receive the gate's slot codes in
//! operand order. Gates with rotation parameters (`ry`, `u`, `cu`, `cp`) are
//! preceded by a `{U θ φ λ}` header line.
//!
//! ```text
//! file_string   := "# " INT "\n" body ":"
//! body          := gate_block ("," "\n" gate_block)*
//! gate_block    := [ "{U " NUM " " NUM " " NUM "}" "\n" ] row
//! row           := CHAR{N}
//! ```
//!
//! The header count is the declared register size; the row width `N` is the
//! highest referenced qubit index plus one. Measurements are dropped and
//! barriers emit nothing.
//!
//! The compact string keeps only the rows, concatenated without separators.
//!
//! # Example: File String
//!
//! ```rust
//! use quic_ir::{Circuit, QubitId};
//! use quic_script::encode_file_string;
//!
//! let mut circuit = Circuit::with_size("demo", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.ry(0.5, QubitId(1)).unwrap();
//!
//! let quic = encode_file_string(&circuit).unwrap();
//! assert_eq!(quic, "# 2\nHI,\nCX,\n{U 0.5 0 0}\nIU:");
//! ```
//!
//! # Example: Compact String
//!
//! ```rust
//! use quic_ir::Circuit;
//! use quic_script::encode_compact_string;
//!
//! let circuit = Circuit::bell().unwrap();
//! assert_eq!(encode_compact_string(&circuit).unwrap(), "HICX");
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Slot codes |
//! |------|------------|
//! | `id`, `x`, `y`, `z`, `h` | `I`, `X`, `Y`, `Z`, `H` |
//! | `s`, `sdg`, `t`, `tdg` | `S`, `s`, `T`, `t` |
//! | `sx`, `sxdg` | `V`, `v` |
//! | `rx`, `rz` | `x`, `z` |
//! | `ry`, `u` | `U` (with header) |
//! | `cx`, `cy`, `cz`, `ch` | `C` + target code |
//! | `swap` | `WW` |
//! | `cu`, `cp` | `CU` (with header) |
//! | `ccx`, `cswap` | `CCX`, `CWW` |

mod compact;
mod config;
mod encoder;
mod error;
mod gate;

pub use compact::compact_string;
pub use config::{EncoderConfig, ParameterArity};
pub use encoder::{
    Encoder, build_row, encode_compact_string, encode_file_string, filter_measurements, row_width,
};
pub use error::{EncodeError, EncodeResult};
pub use gate::{IDENTITY, ParameterHeader, QuicGate};
