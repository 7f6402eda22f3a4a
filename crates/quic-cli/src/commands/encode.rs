//! Encode command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;
use tracing::info;

use quic_script::{Encoder, EncoderConfig, ParameterArity};

use super::common::load_circuit;

/// Execute the encode command.
///
/// Without an output path the encoding alone is written to stdout so it can
/// be piped; status lines are printed only when writing to a file.
pub fn execute(input: &str, output: Option<&str>, compact: bool, lenient_params: bool) -> Result<()> {
    let circuit = load_circuit(input)?;
    info!(
        "Loaded {}: {} qubits, {} instructions",
        input,
        circuit.num_qubits(),
        circuit.len()
    );

    let arity = if lenient_params {
        ParameterArity::Lenient
    } else {
        ParameterArity::Strict
    };
    let encoder = Encoder::new(EncoderConfig::default().with_parameter_arity(arity));

    let encoded = if compact {
        encoder.encode_compact_string(&circuit)
    } else {
        encoder.encode_file_string(&circuit)
    }
    .with_context(|| format!("Failed to encode {input}"))?;

    match output {
        Some(path) => {
            fs::write(path, &encoded).with_context(|| format!("Failed to write file: {path}"))?;
            println!(
                "{} Encoded {} ({} qubits) as {}",
                style("✓").green().bold(),
                style(input).green(),
                circuit.num_qubits(),
                if compact { "compact string" } else { "file string" }
            );
            println!("  Output: {}", style(path).green());
        }
        None => println!("{encoded}"),
    }

    Ok(())
}
