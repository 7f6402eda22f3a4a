//! The quicscript gate set: slot codes and parameter headers.

use std::fmt;
use std::str::FromStr;

use crate::config::ParameterArity;
use crate::error::{EncodeError, EncodeResult};

/// Slot code for a qubit the gate does not touch.
pub const IDENTITY: char = 'I';

/// Gates that quicscript can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuicGate {
    /// Identity gate.
    Id,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate.
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate.
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,
    /// Rotation around X.
    Rx,
    /// Rotation around Y, encoded as `U(θ, 0, 0)`.
    Ry,
    /// Rotation around Z.
    Rz,
    /// Universal single-qubit gate U(θ, φ, λ).
    U,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// SWAP gate.
    Swap,
    /// Controlled-U gate.
    CU,
    /// Controlled phase gate, encoded as controlled `U(0, 0, λ)`.
    CP,
    /// Toffoli gate.
    CCX,
    /// Fredkin gate.
    CSwap,
}

impl QuicGate {
    /// Every supported gate, in table order.
    pub const ALL: [QuicGate; 24] = [
        QuicGate::Id,
        QuicGate::X,
        QuicGate::Y,
        QuicGate::Z,
        QuicGate::H,
        QuicGate::S,
        QuicGate::Sdg,
        QuicGate::T,
        QuicGate::Tdg,
        QuicGate::SX,
        QuicGate::SXdg,
        QuicGate::Rx,
        QuicGate::Ry,
        QuicGate::Rz,
        QuicGate::U,
        QuicGate::CX,
        QuicGate::CY,
        QuicGate::CZ,
        QuicGate::CH,
        QuicGate::Swap,
        QuicGate::CU,
        QuicGate::CP,
        QuicGate::CCX,
        QuicGate::CSwap,
    ];

    /// Resolve a canonical lowercase gate name.
    pub fn from_name(name: &str) -> EncodeResult<Self> {
        let gate = match name {
            "id" => QuicGate::Id,
            "x" => QuicGate::X,
            "y" => QuicGate::Y,
            "z" => QuicGate::Z,
            "h" => QuicGate::H,
            "s" => QuicGate::S,
            "sdg" => QuicGate::Sdg,
            "t" => QuicGate::T,
            "tdg" => QuicGate::Tdg,
            "sx" => QuicGate::SX,
            "sxdg" => QuicGate::SXdg,
            "rx" => QuicGate::Rx,
            "ry" => QuicGate::Ry,
            "rz" => QuicGate::Rz,
            "u" => QuicGate::U,
            "cx" => QuicGate::CX,
            "cy" => QuicGate::CY,
            "cz" => QuicGate::CZ,
            "ch" => QuicGate::CH,
            "swap" => QuicGate::Swap,
            "cu" => QuicGate::CU,
            "cp" => QuicGate::CP,
            "ccx" => QuicGate::CCX,
            "cswap" => QuicGate::CSwap,
            other => return Err(EncodeError::UnknownGate(other.to_string())),
        };
        Ok(gate)
    }

    /// The canonical gate name.
    pub fn name(self) -> &'static str {
        match self {
            QuicGate::Id => "id",
            QuicGate::X => "x",
            QuicGate::Y => "y",
            QuicGate::Z => "z",
            QuicGate::H => "h",
            QuicGate::S => "s",
            QuicGate::Sdg => "sdg",
            QuicGate::T => "t",
            QuicGate::Tdg => "tdg",
            QuicGate::SX => "sx",
            QuicGate::SXdg => "sxdg",
            QuicGate::Rx => "rx",
            QuicGate::Ry => "ry",
            QuicGate::Rz => "rz",
            QuicGate::U => "u",
            QuicGate::CX => "cx",
            QuicGate::CY => "cy",
            QuicGate::CZ => "cz",
            QuicGate::CH => "ch",
            QuicGate::Swap => "swap",
            QuicGate::CU => "cu",
            QuicGate::CP => "cp",
            QuicGate::CCX => "ccx",
            QuicGate::CSwap => "cswap",
        }
    }

    /// Slot codes, one per qubit in the gate's natural operand order
    /// (controls first).
    ///
    /// `cx` is `['C', 'X']`: the control code lands on the first operand and
    /// the target code on the second, so `cx(0, 1)` encodes as `CX`. Tables
    /// that list the target first (`["X", "C"]`) do not apply here; zip these
    /// codes with the instruction's qubits in order.
    pub fn slot_codes(self) -> &'static [char] {
        match self {
            QuicGate::Id => &['I'],
            QuicGate::X => &['X'],
            QuicGate::Y => &['Y'],
            QuicGate::Z => &['Z'],
            QuicGate::H => &['H'],
            QuicGate::S => &['S'],
            QuicGate::Sdg => &['s'],
            QuicGate::T => &['T'],
            QuicGate::Tdg => &['t'],
            QuicGate::SX => &['V'],
            QuicGate::SXdg => &['v'],
            QuicGate::Rx => &['x'],
            QuicGate::Ry | QuicGate::U => &['U'],
            QuicGate::Rz => &['z'],
            QuicGate::CX => &['C', 'X'],
            QuicGate::CY => &['C', 'Y'],
            QuicGate::CZ => &['C', 'Z'],
            QuicGate::CH => &['C', 'H'],
            QuicGate::Swap => &['W', 'W'],
            QuicGate::CU | QuicGate::CP => &['C', 'U'],
            QuicGate::CCX => &['C', 'C', 'X'],
            QuicGate::CSwap => &['C', 'W', 'W'],
        }
    }

    /// Number of qubits the gate acts on.
    #[inline]
    pub fn num_qubits(self) -> usize {
        self.slot_codes().len()
    }

    /// Whether rows of this gate are preceded by a `{U ...}` header.
    pub fn has_parameter_header(self) -> bool {
        matches!(self, QuicGate::Ry | QuicGate::U | QuicGate::CU | QuicGate::CP)
    }

    /// Build the parameter header for this gate, if it carries one.
    pub fn parameter_header(
        self,
        params: &[f64],
        arity: ParameterArity,
    ) -> EncodeResult<Option<ParameterHeader>> {
        if !self.has_parameter_header() {
            return Ok(None);
        }

        let values = match (self, params) {
            (QuicGate::Ry, &[theta]) => [theta, 0.0, 0.0],
            (QuicGate::CP, &[lambda]) => [0.0, 0.0, lambda],
            // The fourth CU value is the global phase, which quicscript drops.
            (QuicGate::U | QuicGate::CU, &[theta, phi, lambda] | &[theta, phi, lambda, _]) => {
                [theta, phi, lambda]
            }
            _ => match arity {
                ParameterArity::Strict => {
                    return Err(EncodeError::MalformedParameters {
                        gate: self.name().to_string(),
                        got: params.len(),
                    });
                }
                ParameterArity::Lenient => self.lenient_values(params),
            },
        };

        Ok(Some(ParameterHeader::new(values)))
    }

    fn lenient_values(self, params: &[f64]) -> [f64; 3] {
        match self {
            QuicGate::CP => [0.0, 0.0, params.first().copied().unwrap_or(0.0)],
            // Ry appends its two zero slots after whatever it was given.
            _ => {
                let mut values = [0.0; 3];
                for (slot, value) in values.iter_mut().zip(params) {
                    *slot = *value;
                }
                values
            }
        }
    }
}

impl FromStr for QuicGate {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuicGate::from_name(s)
    }
}

impl fmt::Display for QuicGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `{U p0 p1 p2}` line preceding a parameterized row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterHeader {
    values: [f64; 3],
}

impl ParameterHeader {
    /// Create a header from three values.
    pub fn new(values: [f64; 3]) -> Self {
        Self { values }
    }

    /// The encoded values.
    pub fn values(&self) -> [f64; 3] {
        self.values
    }
}

impl fmt::Display for ParameterHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values;
        write!(f, "{{U {a} {b} {c}}}")
    }
}
