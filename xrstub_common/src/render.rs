//! Output formatting: the identifier list line and one macro per identifier.

use std::fmt::Write as _;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{config::ListStyle, error::StubError};

lazy_static! {
    // Other and separator categories, the characters Python will not print raw.
    static ref NON_PRINTABLE_RE: Regex = Regex::new(r"^[\p{C}\p{Z}]$").unwrap();
}

/// Macro that logs an identifier's name, then forwards the call to it.
pub fn define_line(identifier: &str) -> String {
    format!(
        "#define {identifier}(...) std::cout << \"{identifier}\" << std::endl; {identifier}(__VA_ARGS__);"
    )
}

/// The whole identifier list on one line.
pub fn list_line(identifiers: &[String], style: ListStyle) -> Result<String, StubError> {
    match style {
        ListStyle::Python => Ok(python_list(identifiers)),
        ListStyle::Json => Ok(serde_json::to_string(identifiers)?),
    }
}

/// Python list literal, e.g. `['xrFoo', 'xrBar']`.
pub fn python_list(identifiers: &[String]) -> String {
    let items = identifiers
        .iter()
        .map(|id| python_repr(id))
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// Python `repr` of a string.
///
/// Single quotes unless the text has a `'` and no `"`. Backslash, the chosen
/// quote and every non-printable character are escaped, the latter as
/// `\xNN`, `\uXXXX` or `\UXXXXXXXX` depending on the code point.
pub fn python_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c if !is_printable(c) => {
                let code = c as u32;
                let _ = match code {
                    0..=0xff => write!(out, "\\x{code:02x}"),
                    0x100..=0xffff => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            },
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Printability as Python's `str.isprintable` sees it.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let mut buf = [0u8; 4];
    !NON_PRINTABLE_RE.is_match(c.encode_utf8(&mut buf))
}
