//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quicscript encoder for quantum circuits",
        style("quic").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  quic-ir      Circuit representation and JSON loading");
    println!("  quic-script  Quicscript file and compact string encoder");
    println!("  quic-cli     Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
