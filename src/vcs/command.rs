//! VCS command runner.
//!
//! Wraps `git` and `hg` invocations with captured stdout/stderr and
//! structured error handling. Every VCS call made by the providers goes
//! through [`run_vcs`].

use crate::error::{LintDiffError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful VCS command execution.
#[derive(Debug, Clone)]
pub struct VcsOutput {
    /// Standard output from the command (untrimmed, diff text is whitespace sensitive).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl VcsOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns the non-empty stdout lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Run a VCS command in the specified working directory.
///
/// # Returns
///
/// * `Ok(VcsOutput)` - On successful execution (exit code 0)
/// * `Err(LintDiffError::VcsError)` - On spawn failure or non-zero exit code
pub fn run_vcs<P: AsRef<Path>>(program: &str, cwd: P, args: &[&str]) -> Result<VcsOutput> {
    let cwd = cwd.as_ref();
    tracing::debug!("running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            LintDiffError::VcsError(format!(
                "failed to execute {} {}: {}",
                program,
                args.join(" "),
                e
            ))
        })?;

    let vcs_output = VcsOutput::from_output(&output);

    if output.status.success() {
        Ok(vcs_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if vcs_output.stderr.is_empty() {
            vcs_output.stdout.trim().to_string()
        } else {
            vcs_output.stderr.clone()
        };

        Err(LintDiffError::VcsError(format!(
            "{} {} failed (exit code {}): {}",
            program,
            args.join(" "),
            exit_code,
            error_msg
        )))
    }
}

/// Run a probe command and report whether it succeeded.
///
/// A missing binary or a non-zero exit both count as "no".
pub fn probe<P: AsRef<Path>>(program: &str, cwd: P, args: &[&str]) -> bool {
    match run_vcs(program, cwd, args) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("{} probe failed: {}", program, e);
            false
        }
    }
}
