//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use quic_ir::Circuit;

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");
    if matches!(ext.to_lowercase().as_str(), "qasm" | "qasm3") {
        anyhow::bail!("OpenQASM input is not supported, convert {path} to a JSON circuit");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    Circuit::from_json(&source).with_context(|| format!("Failed to load circuit: {path}"))
}
