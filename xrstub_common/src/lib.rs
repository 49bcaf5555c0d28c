//! Debug stub generation for prefixed C/C++ entry points.
//!
//! Scans a source file for identifiers that start with a prefix (`xr` for
//! OpenXR calls), prints the collected list, then prints one `#define` per
//! identifier that logs the call name before forwarding to it.

mod config;
mod error;
pub mod extract;
pub mod render;

pub use crate::config::*;
pub use crate::error::StubError;
pub use crate::extract::Extractor;

use std::io::{self, Write};

use tracing::info;

/// Scan the configured file and write the list line plus one macro per identifier.
///
/// Returns the accepted identifiers in file order.
pub fn run_to<W: Write>(config: &Config, out: &mut W) -> Result<Vec<String>, StubError> {
    let extractor = Extractor::new(&config.prefix)?;
    info!(
        "Scanning {} for '{}' identifiers",
        config.file_path.display(),
        extractor.prefix()
    );

    let identifiers = extractor.extract_file(&config.file_path)?;
    write_stubs(&identifiers, config.list_style, out)?;

    info!("Generated {} stubs", identifiers.len());
    Ok(identifiers)
}

/// [`run_to`] on standard output.
pub fn run(config: &Config) -> Result<Vec<String>, StubError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let identifiers = run_to(config, &mut out)?;
    out.flush()?;
    Ok(identifiers)
}

/// Write the list line followed by the macro definitions.
pub fn write_stubs<W: Write>(
    identifiers: &[String],
    style: ListStyle,
    out: &mut W,
) -> Result<(), StubError> {
    writeln!(out, "{}", render::list_line(identifiers, style)?)?;
    for identifier in identifiers {
        writeln!(out, "{}", render::define_line(identifier))?;
    }
    Ok(())
}
