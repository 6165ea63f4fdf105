//! CLI argument parsing for flake8-diff.
//!
//! Uses clap derive macros for declarative argument definitions. Flags that
//! are given override the values loaded from the config file.

use crate::config::Config;
use crate::logging::Verbosity;
use crate::report::ColorTheme;
use clap::Parser;
use std::path::PathBuf;

/// Run flake8 on changed files and report only violations on changed lines.
///
/// By default the working tree is compared against `master`, which suits a
/// checked-out pull request merged with its base branch.
#[derive(Parser, Debug)]
#[command(name = "flake8-diff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Revisions to diff against (passed to `git diff` / `hg diff`).
    #[arg(value_name = "COMMIT")]
    pub commits: Vec<String>,

    /// Force a VCS instead of detecting one (git, hg).
    #[arg(long)]
    pub vcs: Option<String>,

    /// Extra options passed to the linter, e.g. "--max-line-length=100".
    #[arg(long, allow_hyphen_values = true)]
    pub flake8_options: Option<String>,

    /// Print violations in the standard flake8 one-line format.
    #[arg(long)]
    pub standard_flake8_output: bool,

    /// Color theme for the report.
    #[arg(long = "color", value_enum)]
    pub color_theme: Option<ColorTheme>,

    /// Linter command (default: flake8).
    #[arg(long)]
    pub linter: Option<String>,

    /// Only lint changed files matching this glob (repeatable, default: *.py).
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Path to a YAML config file (default: ./.flake8-diff.yaml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log each file and the changed lines being checked.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log VCS and linter commands.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }

    /// Layer the given flags over `config`.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if !self.commits.is_empty() {
            config.commits = self.commits.clone();
        }
        if let Some(vcs) = &self.vcs {
            config.vcs = Some(vcs.clone());
        }
        if let Some(options) = &self.flake8_options {
            config.flake8_options = Some(options.clone());
        }
        if self.standard_flake8_output {
            config.standard_flake8_output = true;
        }
        if let Some(theme) = self.color_theme {
            config.color_theme = theme;
        }
        if let Some(linter) = &self.linter {
            config.linter = linter.clone();
        }
        if !self.include.is_empty() {
            config.include = self.include.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("flake8-diff").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = parse(&[]);
        let config = cli.apply_to(Config::default());

        assert_eq!(config.commits, vec!["master"]);
        assert_eq!(config.color_theme, ColorTheme::Dark);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "origin/main",
            "HEAD",
            "--vcs",
            "git",
            "--flake8-options",
            "--max-line-length=100 --isolated",
            "--standard-flake8-output",
            "--color",
            "off",
            "--include",
            "*.py",
            "--include",
            "*.pyi",
            "-v",
        ]);
        let config = cli.apply_to(Config::default());

        assert_eq!(config.commits, vec!["origin/main", "HEAD"]);
        assert_eq!(config.vcs.as_deref(), Some("git"));
        assert_eq!(
            config.flake8_options.as_deref(),
            Some("--max-line-length=100 --isolated")
        );
        assert!(config.standard_flake8_output);
        assert_eq!(config.color_theme, ColorTheme::Off);
        assert_eq!(config.include, vec!["*.py", "*.pyi"]);
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_unknown_vcs_name_is_accepted_by_parser() {
        // Rejected later, during VCS resolution.
        let cli = parse(&["--vcs", "svn"]);
        assert_eq!(cli.vcs.as_deref(), Some("svn"));
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let result = Cli::try_parse_from(["flake8-diff", "--color", "neon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_flag() {
        assert_eq!(parse(&["--debug", "-v"]).verbosity(), Verbosity::Debug);
    }
}
