//! The diff engine: lint changed files, keep violations on changed lines.
//!
//! For every file the VCS reports as changed, the engine runs the linter,
//! parses its output, and keeps only the violations whose line number is in
//! that file's changed-line set. Output is streamed file by file through the
//! [`Reporter`]; the run succeeds when nothing was kept.

use crate::config::RunOptions;
use crate::error::Result;
use crate::linter::Lint;
use crate::logging::Logger;
use crate::report::Reporter;
use crate::vcs::{IncludeFilter, Vcs, VcsContext, VcsProvider, select_provider};
use crate::violation::parse_line;
use std::io::Write;
use std::path::PathBuf;

pub struct DiffEngine<L: Lint, W: Write> {
    options: RunOptions,
    cwd: PathBuf,
    linter: L,
    reporter: Reporter<W>,
    logger: Logger,
}

impl<L: Lint, W: Write> DiffEngine<L, W> {
    pub fn new(options: RunOptions, cwd: PathBuf, linter: L, out: W, logger: Logger) -> Self {
        let reporter = Reporter::new(out, options.color_theme, options.standard_flake8_output);
        Self {
            options,
            cwd,
            linter,
            reporter,
            logger,
        }
    }

    /// Run over the registered VCS backends.
    ///
    /// Returns `Ok(true)` when no violation was found on a changed line.
    pub fn process(&mut self) -> Result<bool> {
        let ctx = VcsContext {
            cwd: self.cwd.clone(),
            commits: self.options.commits.clone(),
            include: IncludeFilter::new(&self.options.include)?,
        };
        self.process_with(Vcs::registered(&ctx))
    }

    /// Select a backend from `candidates`, then run over it.
    pub fn process_with<P: VcsProvider>(&mut self, candidates: Vec<P>) -> Result<bool> {
        let logger = self.logger.clone();
        logger.scope(|| {
            let vcs = select_provider(self.options.vcs.as_deref(), candidates)?;
            tracing::debug!("using {} in {}", vcs.name(), self.cwd.display());
            self.run(&vcs)
        })
    }

    fn run(&mut self, vcs: &impl VcsProvider) -> Result<bool> {
        let mut overall_violations = 0;

        for filename in vcs.changed_files()? {
            let changed_lines = vcs.changed_lines(&filename)?;

            tracing::info!(
                "checking {} lines {}",
                filename,
                changed_lines.iter().collect::<Vec<_>>().join(", ")
            );

            let report = self.linter.lint(&filename)?;

            let mut violations = Vec::new();
            for line in report.lines() {
                let Some(violation) = parse_line(line) else {
                    continue;
                };
                if changed_lines.contains(&violation.line_number) {
                    self.reporter.violation_kept(&violation)?;
                    violations.push(violation);
                }
            }

            overall_violations += violations.len();
            self.reporter.file_finished(&filename, &violations)?;
        }

        tracing::debug!("{} violation(s) on changed lines", overall_violations);
        Ok(overall_violations == 0)
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}
