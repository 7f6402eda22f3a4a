//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// A named gate with its numeric parameters.
///
/// The IR does not interpret gate names. Names follow the lowercase
/// OpenQASM/Qiskit convention (`h`, `cx`, `ry`, `cu`, ...) and are resolved
/// by whichever consumer lowers the circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Canonical lowercase gate name.
    pub name: String,
    /// Numeric parameters, in the gate's conventional order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Optional label for the gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a parameterless gate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            label: None,
        }
    }

    /// Attach parameters to the gate.
    #[must_use]
    pub fn with_params(mut self, params: impl IntoIterator<Item = f64>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parameters of this gate.
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Check if this gate carries any parameters.
    pub fn is_parameterized(&self) -> bool {
        !self.params.is_empty()
    }
}

impl From<&str> for Gate {
    fn from(name: &str) -> Self {
        Gate::new(name)
    }
}
