#![allow(dead_code)]

use std::io::Write;
use std::sync::OnceLock;

use tempfile::NamedTempFile;

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Write `contents` to a fresh temporary source file.
pub fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Split generated output into the list line and the macro lines.
pub fn split_output(output: &str) -> (&str, Vec<&str>) {
    let mut lines = output.lines();
    let list = lines.next().expect("list line missing");
    (list, lines.collect())
}
