//! Gates command implementation.

use console::style;

use quic_script::QuicGate;

/// Execute the gates command.
pub fn execute() {
    println!("{}", style("Supported gates").bold());
    println!();
    println!("  {:<8} {:<8} {:<6}", "Gate", "Codes", "Header");

    for gate in QuicGate::ALL {
        let codes: String = gate.slot_codes().iter().collect();
        let header = if gate.has_parameter_header() { "{U}" } else { "" };
        println!(
            "  {:<8} {:<8} {:<6}",
            style(gate.name()).cyan(),
            codes,
            style(header).dim()
        );
    }
}
