//! Linter output line parsing.
//!
//! flake8 (and most tools that imitate it) report one finding per line in the
//! form `<filename>:<line>:<char>: <code> <description>`. Anything else in the
//! output, such as summary counts or blank lines, is noise and is skipped.

use regex::Regex;
use std::sync::LazyLock;

static VIOLATION_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<filename>[^\s]+):(?P<line_number>\d+):(?P<char_number>\d+): (?P<error_code>\w*) (?P<description>.*)",
    )
    .expect("Invalid violation line regex")
});

/// One finding reported by the linter.
///
/// Line and column stay as the exact text the linter printed. They are only
/// used as set keys and for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    pub filename: String,
    pub line_number: String,
    pub char_number: String,
    pub error_code: String,
    pub description: String,
}

impl ViolationRecord {
    /// Look up a field by its record key.
    ///
    /// Returns `None` for keys a violation does not carry (e.g. `header`).
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "filename" => Some(&self.filename),
            "line_number" => Some(&self.line_number),
            "char_number" => Some(&self.char_number),
            "error_code" => Some(&self.error_code),
            "description" => Some(&self.description),
            _ => None,
        }
    }
}

/// Parse a single line of linter output.
///
/// Returns `None` when the line does not have the
/// `<filename>:<line>:<char>: <code> <description>` shape.
pub fn parse_line(line: &str) -> Option<ViolationRecord> {
    let caps = VIOLATION_LINE_REGEX.captures(line)?;

    Some(ViolationRecord {
        filename: caps["filename"].to_string(),
        line_number: caps["line_number"].to_string(),
        char_number: caps["char_number"].to_string(),
        error_code: caps["error_code"].to_string(),
        description: caps["description"].to_string(),
    })
}
