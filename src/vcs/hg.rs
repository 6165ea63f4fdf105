//! Mercurial backend.

use super::command::{probe, run_vcs};
use super::{VcsContext, VcsProvider, single_file_lines};
use crate::diff::{ChangedLineSet, parse_changed_lines_from_diff};
use crate::error::Result;

/// Changed files and lines from `hg status` and `hg diff`.
#[derive(Debug, Clone)]
pub struct HgVcs {
    ctx: VcsContext,
}

impl HgVcs {
    pub const NAME: &'static str = "hg";

    pub fn new(ctx: VcsContext) -> Self {
        Self { ctx }
    }

    /// One `--rev` per configured revision.
    fn rev_args(&self) -> Vec<&str> {
        self.ctx
            .commits
            .iter()
            .flat_map(|rev| ["--rev", rev.as_str()])
            .collect()
    }
}

impl VcsProvider for HgVcs {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_used(&self) -> bool {
        probe("hg", &self.ctx.cwd, &["root"])
    }

    fn changed_files(&self) -> Result<Vec<String>> {
        // The "." pattern makes hg print paths relative to the working directory.
        let mut args = vec!["status", "--modified", "--added", "--no-status"];
        args.extend(self.rev_args());
        args.push(".");
        let output = run_vcs("hg", &self.ctx.cwd, &args)?;

        Ok(output
            .lines()
            .into_iter()
            .filter(|path| self.ctx.include.accepts(&self.ctx.cwd, path))
            .map(str::to_string)
            .collect())
    }

    fn changed_lines(&self, filename: &str) -> Result<ChangedLineSet> {
        let mut args = vec!["diff", "--unified", "0"];
        args.extend(self.rev_args());
        args.push(filename);
        let output = run_vcs("hg", &self.ctx.cwd, &args)?;

        Ok(single_file_lines(parse_changed_lines_from_diff(
            &output.stdout,
        )))
    }
}
