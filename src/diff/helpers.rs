//! Helper functions for diff parsing.

/// Line ranges from a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkRange {
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
}

/// Parse the new file path from a "diff --git" line (without the prefix).
///
/// Returns the "b/" path, or None if parsing fails. Paths may contain spaces,
/// so the last " b/" separates the two paths.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    if let Some(b_pos) = rest.rfind(" b/") {
        let b_path = &rest[b_pos + 3..];
        return Some(normalize_path(b_path));
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() >= 2 {
        let b_part = parts[parts.len() - 1];
        if let Some(path) = b_part.strip_prefix("b/") {
            return Some(normalize_path(path));
        }
    }

    None
}

/// Parse the path from a "+++ " line (without the prefix).
///
/// Mercurial appends a tab and a timestamp after the path; git does not.
/// Returns None for `/dev/null` (deleted file).
pub(super) fn parse_new_file_header(rest: &str) -> Option<String> {
    let path = rest.split('\t').next().unwrap_or(rest).trim_end();
    if path == "/dev/null" {
        return None;
    }
    let path = path.strip_prefix("b/").unwrap_or(path);
    Some(normalize_path(path))
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@ optional context".
/// A missing length means 1.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkRange> {
    let line = line.strip_prefix("@@ ")?;

    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let (_, old_len) = parse_range(parts[0].strip_prefix('-')?)?;
    let (new_start, new_len) = parse_range(parts[1].strip_prefix('+')?)?;

    Some(HunkRange {
        old_len,
        new_start,
        new_len,
    })
}

/// Parse "start" or "start,len".
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, len)) => Some((start.parse().ok()?, len.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
