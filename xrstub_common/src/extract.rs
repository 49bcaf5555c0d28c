//! Identifier extraction.
//!
//! A candidate is the prefix followed by any run of characters other than
//! `(`, `_` and `/`. Lines are scanned with their terminator attached, so a
//! candidate that runs to the end of a terminated line ends in `\n`; such
//! candidates are rejected, as is the bare prefix. Any of `\r\n`, `\r` or
//! `\n` ends a line and is read as `\n`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{config::DEFAULT_PREFIX, error::StubError};

/// Characters that end a candidate identifier.
const STOP_CLASS: &str = "[^(_/]*";

lazy_static! {
    static ref DEFAULT_CANDIDATE_RE: Regex = Regex::new(r"xr[^(_/]*").unwrap();
}

/// Finds and filters prefixed identifiers.
#[derive(Debug, Clone)]
pub struct Extractor {
    prefix: String,
    candidate_re: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            candidate_re: DEFAULT_CANDIDATE_RE.clone(),
        }
    }
}

impl Extractor {
    /// Build an extractor for a literal `prefix`.
    pub fn new(prefix: &str) -> Result<Self, StubError> {
        if prefix.is_empty() {
            return Err(StubError::EmptyPrefix);
        }
        if prefix == DEFAULT_PREFIX {
            return Ok(Self::default());
        }
        let pattern = format!("{}{STOP_CLASS}", regex::escape(prefix));
        Ok(Self {
            prefix: prefix.to_string(),
            candidate_re: Regex::new(&pattern)?,
        })
    }

    /// The prefix anchoring every candidate.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// All non-overlapping candidates in `line`, left to right.
    pub fn matches_in_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.candidate_re.find_iter(line).map(|m| m.as_str())
    }

    /// Whether a candidate survives the filter.
    pub fn accepts(&self, candidate: &str) -> bool {
        !candidate.ends_with('\n') && candidate != self.prefix
    }

    /// Accepted identifiers of a single line, in order.
    pub fn extract_line(&self, line: &str) -> Vec<String> {
        self.matches_in_line(line)
            .filter(|candidate| {
                let keep = self.accepts(candidate);
                if !keep {
                    trace!("Rejected candidate {:?}", candidate);
                }
                keep
            })
            .map(str::to_string)
            .collect()
    }

    /// Scan every line of `reader`, terminators included.
    ///
    /// `\r\n`, `\r` and `\n` all end a line and are read as `\n`. Read
    /// failures, including invalid UTF-8, are reported as [`StubError::Io`];
    /// [`Extractor::extract_file`] reports the same failures as
    /// [`StubError::Read`] with the path attached.
    pub fn extract_reader<R: BufRead>(&self, reader: R) -> Result<Vec<String>, StubError> {
        Ok(self.scan(reader)?)
    }

    /// Scan the file at `path`.
    ///
    /// The file handle is released when this returns, on success or failure.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<String>, StubError> {
        let file = File::open(path).map_err(|e| StubError::read(path, e))?;
        let identifiers = self
            .scan(BufReader::new(file))
            .map_err(|e| StubError::read(path, e))?;
        debug!(
            "Extracted {} identifiers from {}",
            identifiers.len(),
            path.display()
        );
        Ok(identifiers)
    }

    fn scan<R: BufRead>(&self, mut reader: R) -> io::Result<Vec<String>> {
        let mut identifiers = Vec::new();
        let mut chunk = Vec::new();
        let mut line_no = 0usize;
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            let text = std::str::from_utf8(&chunk)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            for line in split_lines(text) {
                line_no += 1;
                let found = self.extract_line(&line);
                if !found.is_empty() {
                    trace!("Line {}: {:?}", line_no, found);
                }
                identifiers.extend(found);
            }
        }
        Ok(identifiers)
    }
}

/// Split `text` on `\r\n`, `\r` or `\n`, rewriting each terminator to `\n`.
///
/// A trailing piece without a terminator is kept as is.
fn split_lines(mut text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(pos) = text.find(['\r', '\n']) {
        let end = if text[pos..].starts_with("\r\n") {
            pos + 2
        } else {
            pos + 1
        };
        lines.push(format!("{}\n", &text[..pos]));
        text = &text[end..];
    }
    if !text.is_empty() {
        lines.push(text.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_paren() {
        let ex = Extractor::default();
        assert_eq!(ex.extract_line("xrFoo(bar);"), vec!["xrFoo"]);
    }

    #[test]
    fn test_bare_prefix_rejected() {
        let ex = Extractor::default();
        for line in ["xr(", "xr_", "xr/"] {
            assert_eq!(ex.matches_in_line(line).collect::<Vec<_>>(), vec!["xr"]);
            assert!(ex.extract_line(line).is_empty(), "{line}");
        }
    }

    #[test]
    fn test_match_to_line_end_rejected() {
        let ex = Extractor::default();
        assert!(ex.extract_line("XrResult xrResult\n").is_empty());
        assert!(ex.extract_line("XrResult xrResult\r\n").is_empty());
        assert_eq!(ex.extract_line("XrResult xrResult"), vec!["xrResult"]);
    }

    #[test]
    fn test_include_line() {
        let ex = Extractor::default();
        let line = "#include <openxr/openxr.h>\n";
        assert_eq!(
            ex.matches_in_line(line).collect::<Vec<_>>(),
            vec!["xr", "xr.h>\n"]
        );
        assert!(ex.extract_line(line).is_empty());
    }

    #[test]
    fn test_two_calls_on_one_line() {
        let ex = Extractor::default();
        assert_eq!(
            ex.extract_line("void xrInitialize() { xrShutdown(); }\n"),
            vec!["xrInitialize", "xrShutdown"]
        );
    }

    #[test]
    fn test_uppercase_type_ignored() {
        let ex = Extractor::default();
        assert!(ex.extract_line("XrInstance instance{XR_NULL_HANDLE};").is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let ex = Extractor::new("vk").unwrap();
        assert_eq!(ex.prefix(), "vk");
        assert_eq!(
            ex.extract_line("vkCreateDevice(gpu); xrPollEvent(i);"),
            vec!["vkCreateDevice"]
        );
    }

    #[test]
    fn test_prefix_is_escaped() {
        let ex = Extractor::new("x.").unwrap();
        assert!(ex.extract_line("xyFoo(").is_empty());
        assert_eq!(ex.extract_line("x.Foo("), vec!["x.Foo"]);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(Extractor::new(""), Err(StubError::EmptyPrefix)));
    }

    #[test]
    fn test_reader_keeps_order_and_duplicates() {
        let ex = Extractor::default();
        let src = "xrBar(1);\nint a;\nxrFoo(2); xrBar(3);\nxrBar(4);";
        let ids = ex.extract_reader(src.as_bytes()).unwrap();
        assert_eq!(ids, vec!["xrBar", "xrFoo", "xrBar", "xrBar"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_lines() {
        let ex = Extractor::default();
        assert!(ex.extract_reader("xrA\rxrB\r".as_bytes()).unwrap().is_empty());
        assert_eq!(
            ex.extract_reader("xrInit(a);\rxrPoll(b); xrEnd\rxrTail".as_bytes())
                .unwrap(),
            vec!["xrInit", "xrPoll", "xrTail"]
        );
    }

    #[test]
    fn test_mixed_line_endings() {
        let ex = Extractor::default();
        let src = "xrA(1);\r\nxrB\r\nxrC(2);\rxrD\nxrE(3);";
        assert_eq!(
            ex.extract_reader(src.as_bytes()).unwrap(),
            vec!["xrA", "xrC", "xrE"]
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a\n", "b\n", "c\n", "d"]);
        assert_eq!(split_lines("a\r"), vec!["a\n"]);
        assert_eq!(split_lines("\r\n"), vec!["\n"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_reader_invalid_utf8() {
        let ex = Extractor::default();
        let bytes: &[u8] = &[b'x', b'r', 0xff, b'\n'];
        assert!(matches!(ex.extract_reader(bytes), Err(StubError::Io(_))));
    }

    #[test]
    fn test_file_invalid_utf8_is_read_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'x', b'r', 0xff, b'\n']).unwrap();

        let err = Extractor::default().extract_file(file.path()).unwrap_err();
        assert!(matches!(err, StubError::Read { .. }));
        assert!(!err.is_not_found());
    }
}
