//! Configuration for a stub generation run.
//!
//! A run is parameterized by the file to scan, the identifier prefix that
//! anchors every match, and the style of the list line printed before the
//! macro definitions.
//!
//! ```ignore
//! use xrstub_common::{Config, ListStyle};
//! let cfg = Config::new("src/main.cpp", "xr", ListStyle::Json);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File scanned when no path is given.
pub const DEFAULT_FILE_PATH: &str = "main.cpp";

/// Prefix shared by every OpenXR entry point.
pub const DEFAULT_PREFIX: &str = "xr";

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The file to scan.
    pub file_path: PathBuf,
    /// Literal prefix that starts every candidate identifier.
    pub prefix: String,
    /// How the accepted identifier list is printed.
    pub list_style: ListStyle,
}

impl Config {
    /// Create a new configuration.
    pub fn new(
        file_path: impl Into<PathBuf>,
        prefix: impl Into<String>,
        list_style: ListStyle,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            prefix: prefix.into(),
            list_style,
        }
    }

    /// Convenience: default prefix and list style for `file_path`.
    pub fn for_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATH, DEFAULT_PREFIX, ListStyle::default())
    }
}

/// Rendering of the identifier list line.
///
/// - Python: `['xrFoo', 'xrBar']`, the format the stub list has always had.
/// - Json: `["xrFoo","xrBar"]`, for feeding other tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStyle {
    /// Python list literal.
    #[default]
    Python,
    /// Compact JSON array.
    Json,
}
