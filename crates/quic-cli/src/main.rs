//! Quicscript Command-Line Interface
//!
//! Converts JSON circuit descriptions into quicscript.
//!
//! ```text
//! quic encode -i bell.json               # file string to stdout
//! quic encode -i bell.json --compact     # rows only
//! quic encode -i bell.json -o bell.quic  # write to a file
//! quic gates                             # supported gate table
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{encode, gates, version};

/// quic - encode quantum circuits as quicscript
#[derive(Parser)]
#[command(name = "quic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a circuit as quicscript
    Encode {
        /// Input file (JSON circuit)
        #[arg(short, long)]
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit the compact string instead of the file string
        #[arg(long)]
        compact: bool,

        /// Pass malformed parameter lists through instead of rejecting them
        #[arg(long)]
        lenient_params: bool,
    },

    /// List the supported gates and their slot codes
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            compact,
            lenient_params,
        } => encode::execute(&input, output.as_deref(), compact, lenient_params),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
