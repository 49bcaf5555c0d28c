use std::path::PathBuf;

use clap::Parser;
use xrstub_common::{Config, DEFAULT_FILE_PATH, DEFAULT_PREFIX, ListStyle};

/// xrstub - Generate logging stubs for prefixed API calls
#[derive(Parser, Debug)]
#[command(name = "xrstub")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the source file to scan
    #[arg(short = 'f', long, default_value = DEFAULT_FILE_PATH)]
    pub file_path: PathBuf,

    /// Prefix that starts every identifier
    #[arg(short = 'p', long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// How to print the identifier list line
    #[arg(long, value_enum, default_value = "python")]
    pub list_style: ListStyleArg,
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> Config {
        Config::new(
            self.file_path.clone(),
            self.prefix.clone(),
            self.list_style.clone().into(),
        )
    }
}

/// Command-line argument wrapper for ListStyle
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ListStyleArg {
    /// Python list literal
    #[value(name = "python")]
    Python,
    /// JSON array
    #[value(name = "json")]
    Json,
}

impl From<ListStyleArg> for ListStyle {
    fn from(arg: ListStyleArg) -> Self {
        match arg {
            ListStyleArg::Python => ListStyle::Python,
            ListStyleArg::Json => ListStyle::Json,
        }
    }
}
