//! Git backend.

use super::command::{probe, run_vcs};
use super::{VcsContext, VcsProvider, single_file_lines};
use crate::diff::{ChangedLineSet, parse_changed_lines_from_diff};
use crate::error::Result;

/// Changed files and lines from `git diff`.
///
/// Paths are reported relative to the working directory (`--relative`), so
/// they can be handed to the linter as-is.
#[derive(Debug, Clone)]
pub struct GitVcs {
    ctx: VcsContext,
}

impl GitVcs {
    pub const NAME: &'static str = "git";

    pub fn new(ctx: VcsContext) -> Self {
        Self { ctx }
    }

    /// `git diff` with output settings pinned against user config.
    ///
    /// `core.quotePath=false` keeps non-ASCII paths raw instead of C-quoted.
    fn diff_args<'a>(&'a self, extra: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec![
            "-c",
            "core.quotePath=false",
            "diff",
            "--no-color",
            "--no-ext-diff",
            "--relative",
            "--src-prefix=a/",
            "--dst-prefix=b/",
        ];
        args.extend_from_slice(extra);
        args.extend(self.ctx.commits.iter().map(String::as_str));
        args
    }
}

impl VcsProvider for GitVcs {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_used(&self) -> bool {
        probe("git", &self.ctx.cwd, &["rev-parse", "--is-inside-work-tree"])
    }

    fn changed_files(&self) -> Result<Vec<String>> {
        // Added, copied, modified, renamed, type-changed; deletions are skipped.
        let args = self.diff_args(&["--name-only", "--diff-filter=ACMRT"]);
        let output = run_vcs("git", &self.ctx.cwd, &args)?;

        Ok(output
            .lines()
            .into_iter()
            .filter(|path| self.ctx.include.accepts(&self.ctx.cwd, path))
            .map(str::to_string)
            .collect())
    }

    fn changed_lines(&self, filename: &str) -> Result<ChangedLineSet> {
        let mut args = self.diff_args(&["-U0"]);
        args.push("--");
        args.push(filename);
        let output = run_vcs("git", &self.ctx.cwd, &args)?;

        Ok(single_file_lines(parse_changed_lines_from_diff(
            &output.stdout,
        )))
    }
}
