//! Unified diff reading for flake8-diff.
//!
//! Both the git and Mercurial backends ask their VCS for a zero-context
//! unified diff (`-U0`) and hand the text to this module, which turns it into
//! the set of changed line numbers per file. The parsing supports:
//! - Multiple files and multiple hunks per file
//! - New files (from /dev/null) and deleted files (to /dev/null)
//! - Renames (the new path wins)
//! - Git (`diff --git`) and plain Mercurial (`diff -r`) file headers

mod helpers;
mod line_set;
mod parser;


// Re-export public API
pub use line_set::ChangedLineSet;
pub use parser::{ChangedLines, parse_changed_lines_from_diff};
