//! xrstub CLI
//!
//! Entry point for the stub generator. Scans a source file for prefixed
//! identifiers and prints a logging `#define` for each one.

mod args;

use clap::Parser;
use tracing::{error, info};

use args::Args;

/// Runs the stub generator.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Scans the source file
/// 4. Prints the identifier list and the macro definitions
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    info!("Config: {:?}", config);

    if let Err(e) = xrstub_common::run(&config) {
        if e.is_not_found() {
            error!(
                "Source file '{}' does not exist; pass another with --file-path",
                config.file_path.display()
            );
        }
        return Err(e.into());
    }

    Ok(())
}
