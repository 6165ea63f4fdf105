//! Linter process runner.
//!
//! The linter binary is resolved on `PATH` once, when the runner is built, so
//! a missing linter fails the run before any file is processed. Each changed
//! file then gets its own linter process, awaited to completion.

use crate::error::{LintDiffError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit statuses that mean the linter ran to completion.
///
/// flake8 exits with 1 whenever it reports anything.
const COMPLETED_EXIT_CODES: &[i32] = &[0, 1];

/// Something that lints one file and returns its raw text report.
pub trait Lint {
    fn lint(&self, filename: &str) -> Result<String>;
}

impl<T: Lint + ?Sized> Lint for &T {
    fn lint(&self, filename: &str) -> Result<String> {
        (**self).lint(filename)
    }
}

/// A linter invoked as `<binary> [command args] [extra options] <filename>`.
#[derive(Debug, Clone)]
pub struct LinterCommand {
    binary: PathBuf,
    args: Vec<String>,
    cwd: PathBuf,
}

impl LinterCommand {
    /// Resolve a linter command line such as `flake8` or `python -m flake8`.
    ///
    /// `extra_options` is split on whitespace; empty tokens are dropped.
    pub fn resolve(command: &str, extra_options: Option<&str>, cwd: &Path) -> Result<Self> {
        let words = shell_words::split(command).map_err(|e| {
            LintDiffError::UserError(format!(
                "failed to parse linter command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command, e
            ))
        })?;

        let Some((program, command_args)) = words.split_first() else {
            return Err(LintDiffError::UserError(format!(
                "linter command is empty after parsing: '{}'",
                command
            )));
        };

        let binary = find_executable(program, cwd).ok_or_else(|| {
            LintDiffError::UserError(format!(
                "linter '{}' not found.\n\n\
                 Fix: install it (e.g. `pip install flake8`) or pass --linter with a valid path.",
                program
            ))
        })?;

        let mut args = command_args.to_vec();
        args.extend(
            extra_options
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string),
        );

        tracing::debug!("resolved linter: {} {}", binary.display(), args.join(" "));

        Ok(Self {
            binary,
            args,
            cwd: cwd.to_path_buf(),
        })
    }

}

impl Lint for LinterCommand {
    fn lint(&self, filename: &str) -> Result<String> {
        let output = Command::new(&self.binary)
            .current_dir(&self.cwd)
            .args(&self.args)
            .arg(filename)
            .output()
            .map_err(|e| {
                LintDiffError::LinterError(format!(
                    "failed to execute {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        match output.status.code() {
            Some(code) if COMPLETED_EXIT_CODES.contains(&code) => {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
            code => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(LintDiffError::LinterError(format!(
                    "{} {} exited with {}: {}",
                    self.binary.display(),
                    filename,
                    code.map_or_else(|| "a signal".to_string(), |c| format!("exit code {}", c)),
                    stderr.trim()
                )))
            }
        }
    }
}

/// Locate `program` the way a shell would.
///
/// Names containing a path separator are taken relative to `cwd`; bare names
/// are searched on `PATH`.
fn find_executable(program: &str, cwd: &Path) -> Option<PathBuf> {
    if program.contains('/') || program.contains(std::path::MAIN_SEPARATOR) {
        let candidate = cwd.join(program);
        return is_executable(&candidate).then_some(candidate);
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Write an executable shell script standing in for a linter.
    fn fake_linter(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_resolve_splits_extra_options_on_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        fake_linter(temp_dir.path(), "lint.sh", "exit 0");

        let linter = LinterCommand::resolve(
            "./lint.sh --isolated",
            Some("  --max-line-length=100   --select E,W "),
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(
            linter.args,
            vec!["--isolated", "--max-line-length=100", "--select", "E,W"]
        );
        assert!(linter.binary.ends_with("lint.sh"));
    }

    #[test]
    fn test_missing_linter_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = LinterCommand::resolve(
            "definitely-not-a-real-linter-binary",
            None,
            temp_dir.path(),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, LintDiffError::UserError(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_empty_command_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = LinterCommand::resolve("   ", None, temp_dir.path());
        assert!(matches!(result, Err(LintDiffError::UserError(_))));
    }

    #[test]
    fn test_non_executable_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("plain.txt"), "").unwrap();
        assert!(find_executable("./plain.txt", temp_dir.path()).is_none());
    }

    #[test]
    fn test_lint_passes_filename_last_and_captures_stdout() {
        let temp_dir = TempDir::new().unwrap();
        fake_linter(temp_dir.path(), "echo.sh", r#"echo "$@""#);

        let linter = LinterCommand::resolve("./echo.sh", Some("-q"), temp_dir.path()).unwrap();
        let output = linter.lint("a.py").unwrap();

        assert_eq!(output, "-q a.py\n");
    }

    #[test]
    fn test_exit_code_one_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        fake_linter(
            temp_dir.path(),
            "flake.sh",
            r#"echo "$1:1:1: E999 boom"; exit 1"#,
        );

        let linter = LinterCommand::resolve("./flake.sh", None, temp_dir.path()).unwrap();
        assert_eq!(linter.lint("a.py").unwrap(), "a.py:1:1: E999 boom\n");
    }

    #[test]
    fn test_other_exit_codes_are_linter_errors() {
        let temp_dir = TempDir::new().unwrap();
        fake_linter(temp_dir.path(), "broken.sh", "echo oops >&2; exit 2");

        let linter = LinterCommand::resolve("./broken.sh", None, temp_dir.path()).unwrap();
        let err = linter.lint("a.py").unwrap_err();

        assert!(matches!(err, LintDiffError::LinterError(_)));
        assert!(err.to_string().contains("exit code 2"));
        assert!(err.to_string().contains("oops"));
    }
}
