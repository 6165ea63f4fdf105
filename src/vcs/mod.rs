//! Version control backends.
//!
//! A backend answers three questions: is it in effect in the working
//! directory, which files changed, and which lines of a given file changed.
//! Backends form the closed set [`Vcs`]; [`select_provider`] picks one from
//! an optional explicit name or by probing in registration order.

mod command;
mod filter;
mod git;
mod hg;

pub use command::{VcsOutput, probe, run_vcs};
pub use filter::IncludeFilter;
pub use git::GitVcs;
pub use hg::HgVcs;

use crate::diff::{ChangedLineSet, ChangedLines};
use crate::error::{LintDiffError, Result};
use std::path::PathBuf;

/// Names of the registered backends, in probe order.
pub const SUPPORTED_VCS: &[&str] = &[GitVcs::NAME, HgVcs::NAME];

/// Capability interface consumed by the diff engine.
pub trait VcsProvider {
    /// Registry name (`git`, `hg`).
    fn name(&self) -> &str;

    /// Returns true if this VCS manages the working directory.
    fn is_used(&self) -> bool;

    /// Files changed in the configured revision range, in VCS order.
    fn changed_files(&self) -> Result<Vec<String>>;

    /// Line numbers of `filename` added or modified in the revision range.
    fn changed_lines(&self, filename: &str) -> Result<ChangedLineSet>;
}

/// Shared inputs for every backend.
#[derive(Debug, Clone)]
pub struct VcsContext {
    /// Directory the VCS commands and the linter run in.
    pub cwd: PathBuf,
    /// Revision arguments passed to the diff command.
    pub commits: Vec<String>,
    /// Which changed files are worth linting.
    pub include: IncludeFilter,
}

/// The registered VCS backends.
#[derive(Debug, Clone)]
pub enum Vcs {
    Git(GitVcs),
    Mercurial(HgVcs),
}

impl Vcs {
    /// All registered backends in probe order.
    pub fn registered(ctx: &VcsContext) -> Vec<Vcs> {
        vec![
            Vcs::Git(GitVcs::new(ctx.clone())),
            Vcs::Mercurial(HgVcs::new(ctx.clone())),
        ]
    }
}

impl VcsProvider for Vcs {
    fn name(&self) -> &str {
        match self {
            Vcs::Git(vcs) => vcs.name(),
            Vcs::Mercurial(vcs) => vcs.name(),
        }
    }

    fn is_used(&self) -> bool {
        match self {
            Vcs::Git(vcs) => vcs.is_used(),
            Vcs::Mercurial(vcs) => vcs.is_used(),
        }
    }

    fn changed_files(&self) -> Result<Vec<String>> {
        match self {
            Vcs::Git(vcs) => vcs.changed_files(),
            Vcs::Mercurial(vcs) => vcs.changed_files(),
        }
    }

    fn changed_lines(&self, filename: &str) -> Result<ChangedLineSet> {
        match self {
            Vcs::Git(vcs) => vcs.changed_lines(filename),
            Vcs::Mercurial(vcs) => vcs.changed_lines(filename),
        }
    }
}

/// Pick a backend from `candidates`.
///
/// With `requested`, the candidate of that name is returned without probing,
/// or `UnsupportedVcs` if no candidate has the name. Without it, the first
/// candidate whose `is_used()` is true wins, or `NotLocatableVcs`.
pub fn select_provider<P: VcsProvider>(requested: Option<&str>, candidates: Vec<P>) -> Result<P> {
    if let Some(name) = requested {
        return candidates
            .into_iter()
            .find(|vcs| vcs.name() == name)
            .ok_or_else(|| LintDiffError::UnsupportedVcs(name.to_string()));
    }

    candidates
        .into_iter()
        .find(|vcs| vcs.is_used())
        .ok_or(LintDiffError::NotLocatableVcs)
}

/// Merge the entries of a single-file diff into one set.
///
/// A diff limited to one path has at most one entry, but its key may be
/// repository-relative rather than relative to the working directory.
fn single_file_lines(parsed: ChangedLines) -> ChangedLineSet {
    let mut lines = ChangedLineSet::new();
    for set in parsed.into_values() {
        for line in set.iter() {
            lines.insert(line);
        }
    }
    lines
}
