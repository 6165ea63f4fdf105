//! Core diff parsing logic.

use std::collections::HashMap;

use super::helpers::{HunkRange, parse_diff_git_line, parse_hunk_header, parse_new_file_header};
use super::line_set::ChangedLineSet;

/// Changed line numbers keyed by repository-relative path (forward slashes).
///
/// A file that only lost lines still has an entry, with an empty set.
/// Deleted files have no entry.
pub type ChangedLines = HashMap<String, ChangedLineSet>;

/// Remaining body lines of the hunk currently being read.
#[derive(Debug, Default)]
struct HunkCursor {
    new_line: usize,
    old_remaining: usize,
    new_remaining: usize,
}

impl HunkCursor {
    fn start(range: HunkRange) -> Self {
        Self {
            new_line: range.new_start,
            old_remaining: range.old_len,
            new_remaining: range.new_len,
        }
    }

    fn is_open(&self) -> bool {
        self.old_remaining > 0 || self.new_remaining > 0
    }
}

/// Parse changed (added) line numbers per file from raw diff output.
///
/// Expects unified diff output, ideally with `-U0`. Context lines are tolerated
/// and advance the new-file line counter. Hunk bodies are consumed by the
/// counts in their header, so an added line whose text starts with `++ ` is not
/// mistaken for a file header.
pub fn parse_changed_lines_from_diff(diff_output: &str) -> ChangedLines {
    let mut result = ChangedLines::new();
    let mut current_file: Option<String> = None;
    let mut hunk = HunkCursor::default();

    for line in diff_output.lines() {
        if hunk.is_open() {
            if line.starts_with('+') {
                if let Some(file) = &current_file {
                    result
                        .entry(file.clone())
                        .or_default()
                        .insert(hunk.new_line.to_string());
                }
                hunk.new_line += 1;
                hunk.new_remaining = hunk.new_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with('-') {
                hunk.old_remaining = hunk.old_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with(' ') || line.is_empty() {
                hunk.new_line += 1;
                hunk.old_remaining = hunk.old_remaining.saturating_sub(1);
                hunk.new_remaining = hunk.new_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with('\\') {
                continue;
            }
            // Truncated hunk: fall through and treat the line as a header.
            hunk = HunkCursor::default();
        }

        // Format: "diff --git a/path/to/file b/path/to/file"
        if let Some(rest) = line.strip_prefix("diff --git ") {
            current_file = parse_diff_git_line(rest);
            continue;
        }

        // Mercurial: "diff -r abc123 path/to/file". The "+++" line has the path.
        if line.starts_with("diff ") {
            current_file = None;
            continue;
        }

        if line.starts_with("--- ") {
            continue;
        }

        // Format: "+++ b/path/to/file", "+++ b/path\tdate" (hg) or "+++ /dev/null"
        if let Some(rest) = line.strip_prefix("+++ ") {
            current_file = parse_new_file_header(rest);
            if let Some(file) = &current_file {
                result.entry(file.clone()).or_default();
            }
            continue;
        }

        if line.starts_with("@@ ") {
            if let Some(range) = parse_hunk_header(line) {
                hunk = HunkCursor::start(range);
            }
            continue;
        }

        // Ignore everything else ("index ...", "new file mode", "\ No newline", binary markers)
    }

    result
}
